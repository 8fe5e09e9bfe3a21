//! Abstract Syntax Tree (AST) definitions
//!
//! The node set is closed: every consumer matches exhaustively, so adding a
//! variant is a compile error everywhere it is not yet handled.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// AST schema version
///
/// Included in JSON dumps. Increment when making breaking changes to the
/// AST structure.
pub const AST_VERSION: u32 = 1;

/// Root of a parsed program: `PROGRAM name; block.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub block: Block,
    pub span: Span,
}

/// Versioned AST wrapper for JSON serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedProgram {
    /// AST schema version
    pub ast_version: u32,
    /// The actual program AST
    #[serde(flatten)]
    pub program: Program,
}

impl VersionedProgram {
    /// Create a new versioned program wrapper
    pub fn new(program: Program) -> Self {
        Self {
            ast_version: AST_VERSION,
            program,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Program> for VersionedProgram {
    fn from(program: Program) -> Self {
        Self::new(program)
    }
}

/// Declarations followed by the program body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub declarations: Vec<VarDecl>,
    pub body: Compound,
}

/// One declared variable. `var a, b : integer;` yields two of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: Variable,
    pub type_spec: TypeSpec,
    pub span: Span,
}

/// Declared type of a variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeSpec {
    Integer,
    Real,
}

impl TypeSpec {
    /// Name of the built-in type symbol this refers to
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeSpec::Integer => "INTEGER",
            TypeSpec::Real => "REAL",
        }
    }
}

/// `begin ... end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Compound(Compound),
    Assign(Assign),
    /// Empty statement (e.g. before `end` after a trailing `;`)
    NoOp,
}

/// `target := expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub target: Variable,
    pub expr: Expr,
    pub span: Span,
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Number(NumberLiteral, Span),
    String(String, Span),
    Variable(Variable),
}

/// Numeric literal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumberLiteral {
    Integer(i64),
    Real(f64),
}

/// Variable reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Name as written in the source
    pub name: String,
    pub span: Span,
}

/// Binary expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: BinaryOp,
    pub right: Box<Expr>,
    pub span: Span,
}

// Long operator chains build left spines as deep as the chain; unlink the
// spine so dropping it does not recurse once per operator.
impl Drop for BinaryExpr {
    fn drop(&mut self) {
        let mut next = self.take_left_chain();
        while let Some(mut expr) = next {
            next = match expr.as_mut() {
                Expr::Binary(inner) => inner.take_left_chain(),
                _ => None,
            };
        }
    }
}

impl BinaryExpr {
    /// Detach the left operand when it is itself a binary expression
    fn take_left_chain(&mut self) -> Option<Box<Expr>> {
        if !matches!(*self.left, Expr::Binary(_)) {
            return None;
        }
        let placeholder = Expr::Number(NumberLiteral::Integer(0), self.span);
        Some(std::mem::replace(&mut self.left, Box::new(placeholder)))
    }
}

/// Unary expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
    pub span: Span,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// `div`: floor division
    IntDiv,
    /// `/`: always real
    FloatDiv,
    Eq,
    Ne,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::IntDiv => "div",
            BinaryOp::FloatDiv => "/",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
        }
    }
}

/// Unary operators
///
/// `Eq` and `Ne` are accepted for compatibility and evaluate to their
/// operand unchanged. The parser never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    Eq,
    Ne,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Eq => "==",
            UnaryOp::Ne => "!=",
        }
    }
}

impl Expr {
    /// Get the span of this expression
    pub fn span(&self) -> Span {
        match self {
            Expr::Binary(b) => b.span,
            Expr::Unary(u) => u.span,
            Expr::Number(_, span) | Expr::String(_, span) => *span,
            Expr::Variable(v) => v.span,
        }
    }
}
