//! Expression parsing
//!
//! Two precedence tiers, both left-associative:
//! `expr` handles `+ - == !=`, `term` handles `* div /`.

use crate::ast::*;
use crate::error::{ParseError, SyntaxError};
use crate::parser::Parser;
use crate::token::{TokenKind, TokenValue};

impl Parser {
    /// `term (('+' | '-' | '==' | '!=') term)*`
    pub(super) fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.term()?;

        while let Some(op) = self.expr_op() {
            self.advance()?;
            let right = self.term()?;
            node = binary(node, op, right);
        }

        Ok(node)
    }

    /// `factor (('*' | 'div' | '/') factor)*`
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.factor()?;

        while let Some(op) = self.term_op() {
            self.advance()?;
            let right = self.factor()?;
            node = binary(node, op, right);
        }

        Ok(node)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::Plus | TokenKind::Minus => self.unary(),
            TokenKind::Integer | TokenKind::Real | TokenKind::String => self.literal(),
            TokenKind::LeftParen => {
                self.advance()?;
                let expr = self.nested(|p| p.expr())?;
                self.eat(TokenKind::RightParen)?;
                Ok(expr)
            }
            _ => Ok(Expr::Variable(self.variable()?)),
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op_token = self.advance()?;
        let op = if op_token.kind == TokenKind::Minus {
            UnaryOp::Minus
        } else {
            UnaryOp::Plus
        };

        let operand = self.nested(|p| p.factor())?;

        Ok(Expr::Unary(UnaryExpr {
            op,
            span: op_token.span.merge(operand.span()),
            expr: Box::new(operand),
        }))
    }

    fn literal(&mut self) -> Result<Expr, ParseError> {
        let token = self.advance()?;
        let expr = match token.value {
            TokenValue::Integer(n) => Expr::Number(NumberLiteral::Integer(n), token.span),
            TokenValue::Real(r) => Expr::Number(NumberLiteral::Real(r), token.span),
            TokenValue::Str(s) => Expr::String(s, token.span),
            TokenValue::Text(_) => {
                return Err(SyntaxError::UnexpectedToken {
                    expected: TokenKind::Integer,
                    found: token.kind,
                    span: token.span,
                }
                .into())
            }
        };
        Ok(expr)
    }

    fn expr_op(&self) -> Option<BinaryOp> {
        match self.current.kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::EqualEqual => Some(BinaryOp::Eq),
            TokenKind::BangEqual => Some(BinaryOp::Ne),
            _ => None,
        }
    }

    fn term_op(&self) -> Option<BinaryOp> {
        match self.current.kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Div => Some(BinaryOp::IntDiv),
            TokenKind::Slash => Some(BinaryOp::FloatDiv),
            _ => None,
        }
    }
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        span: left.span().merge(right.span()),
        left: Box::new(left),
        op,
        right: Box::new(right),
    })
}
