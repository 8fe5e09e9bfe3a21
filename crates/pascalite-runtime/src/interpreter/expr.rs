//! Expression evaluation

use crate::ast::*;
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::span::Span;
use crate::value::Value;

impl Interpreter {
    /// Evaluate an expression
    pub(super) fn eval_expr(&self, expr: &Expr, env: &Environment) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Number(NumberLiteral::Integer(n), _) => Ok(Value::Integer(*n)),
            Expr::Number(NumberLiteral::Real(r), _) => Ok(Value::Real(*r)),
            Expr::String(s, _) => Ok(Value::Str(s.clone())),
            Expr::Variable(var) => self.get_variable(var, env),
            Expr::Unary(unary) => self.eval_unary(unary, env),
            Expr::Binary(binary) => self.eval_binary(binary, env),
        }
    }

    fn get_variable(&self, var: &Variable, env: &Environment) -> Result<Value, RuntimeError> {
        match env.get(&var.name) {
            Some(value) if !(self.options.falsy_is_undefined && value.is_falsy()) => {
                Ok(value.clone())
            }
            _ => Err(RuntimeError::UndefinedVariable {
                name: var.name.clone(),
                span: var.span,
            }),
        }
    }

    fn eval_unary(&self, unary: &UnaryExpr, env: &Environment) -> Result<Value, RuntimeError> {
        let value = self.eval_expr(&unary.expr, env)?;

        match unary.op {
            UnaryOp::Plus => match value {
                Value::Integer(_) | Value::Real(_) => Ok(value),
                other => Err(unary_mismatch(unary, &other)),
            },
            UnaryOp::Minus => match value {
                Value::Integer(n) => {
                    n.checked_neg()
                        .map(Value::Integer)
                        .ok_or(RuntimeError::IntegerOverflow {
                            op: unary.op.as_str(),
                            span: unary.span,
                        })
                }
                Value::Real(r) => Ok(Value::Real(-r)),
                other => Err(unary_mismatch(unary, &other)),
            },
            // Prefix equality operators leave their operand untouched
            UnaryOp::Eq | UnaryOp::Ne => Ok(value),
        }
    }

    /// Evaluate a chain of binary operators
    ///
    /// Operator chains parse into left-leaning trees as deep as the chain is
    /// long, so the left spine is walked with a loop and folded back up.
    fn eval_binary(&self, binary: &BinaryExpr, env: &Environment) -> Result<Value, RuntimeError> {
        let mut spine = vec![binary];
        let mut leftmost = &*binary.left;
        while let Expr::Binary(inner) = leftmost {
            spine.push(inner);
            leftmost = &*inner.left;
        }

        let mut acc = self.eval_expr(leftmost, env)?;
        for node in spine.iter().rev() {
            let right = self.eval_expr(&node.right, env)?;
            acc = apply_binary(node.op, acc, right, node.span)?;
        }
        Ok(acc)
    }
}

/// Apply one binary operator to evaluated operands
fn apply_binary(
    op: BinaryOp,
    left: Value,
    right: Value,
    span: Span,
) -> Result<Value, RuntimeError> {
    match op {
        BinaryOp::Add => match (&left, &right) {
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
            _ => arithmetic(op, &left, &right, span, i64::checked_add, |a, b| a + b),
        },
        BinaryOp::Sub => arithmetic(op, &left, &right, span, i64::checked_sub, |a, b| a - b),
        BinaryOp::Mul => arithmetic(op, &left, &right, span, i64::checked_mul, |a, b| a * b),
        BinaryOp::IntDiv => floor_div(&left, &right, span),
        BinaryOp::FloatDiv => {
            let (a, b) = real_operands(op, &left, &right, span)?;
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { span });
            }
            Ok(Value::Real(a / b))
        }
        BinaryOp::Eq => Ok(Value::Bool(left.equals(&right))),
        BinaryOp::Ne => Ok(Value::Bool(!left.equals(&right))),
    }
}

/// `+ - *`: checked integer arithmetic, real if either side is real
fn arithmetic(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    span: Span,
    int_op: fn(i64, i64) -> Option<i64>,
    real_op: fn(f64, f64) -> f64,
) -> Result<Value, RuntimeError> {
    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        return int_op(*a, *b)
            .map(Value::Integer)
            .ok_or(RuntimeError::IntegerOverflow {
                op: op.as_str(),
                span,
            });
    }

    let (a, b) = real_operands(op, left, right, span)?;
    Ok(Value::Real(real_op(a, b)))
}

/// `div`: rounds toward negative infinity
fn floor_div(left: &Value, right: &Value, span: Span) -> Result<Value, RuntimeError> {
    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        let (a, b) = (*a, *b);
        if b == 0 {
            return Err(RuntimeError::DivisionByZero { span });
        }
        let (Some(quotient), Some(remainder)) = (a.checked_div(b), a.checked_rem(b)) else {
            return Err(RuntimeError::IntegerOverflow {
                op: BinaryOp::IntDiv.as_str(),
                span,
            });
        };
        let floored = if remainder != 0 && (remainder < 0) != (b < 0) {
            quotient - 1
        } else {
            quotient
        };
        return Ok(Value::Integer(floored));
    }

    let (a, b) = real_operands(BinaryOp::IntDiv, left, right, span)?;
    if b == 0.0 {
        return Err(RuntimeError::DivisionByZero { span });
    }
    Ok(Value::Real((a / b).floor()))
}

fn real_operands(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    span: Span,
) -> Result<(f64, f64), RuntimeError> {
    match (left.as_real(), right.as_real()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(RuntimeError::TypeMismatch {
            op: op.as_str(),
            left: left.type_name(),
            right: right.type_name(),
            span,
        }),
    }
}

fn unary_mismatch(unary: &UnaryExpr, operand: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch {
        op: unary.op.as_str(),
        left: operand.type_name(),
        right: operand.type_name(),
        span: unary.span,
    }
}
