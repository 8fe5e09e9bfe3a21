//! Program, declaration and statement parsing

use crate::ast::*;
use crate::error::{ParseError, SyntaxError};
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser {
    /// `PROGRAM name ; block .`
    pub(super) fn program(&mut self) -> Result<Program, ParseError> {
        let start = self.eat(TokenKind::Program)?.span;
        let name = self.variable()?.name;
        self.eat(TokenKind::Semicolon)?;
        let block = self.block()?;
        let end = self.eat(TokenKind::Dot)?.span;

        Ok(Program {
            name,
            block,
            span: start.merge(end),
        })
    }

    fn block(&mut self) -> Result<Block, ParseError> {
        let declarations = self.declarations()?;
        let body = self.compound()?;
        Ok(Block { declarations, body })
    }

    /// Optional `VAR` section with one or more `a, b : type ;` groups
    fn declarations(&mut self) -> Result<Vec<VarDecl>, ParseError> {
        let mut declarations = Vec::new();
        if !self.check(TokenKind::Var) {
            return Ok(declarations);
        }

        self.eat(TokenKind::Var)?;
        loop {
            declarations.extend(self.variable_declaration()?);
            self.eat(TokenKind::Semicolon)?;
            if !self.check(TokenKind::Id) {
                break;
            }
        }

        Ok(declarations)
    }

    /// `a, b : type` expands to one declaration per name
    fn variable_declaration(&mut self) -> Result<Vec<VarDecl>, ParseError> {
        let mut names = vec![self.variable()?];
        while self.check(TokenKind::Comma) {
            self.advance()?;
            names.push(self.variable()?);
        }

        self.eat(TokenKind::Colon)?;
        let type_span = self.current.span;
        let type_spec = self.type_spec()?;

        Ok(names
            .into_iter()
            .map(|name| VarDecl {
                span: name.span.merge(type_span),
                name,
                type_spec,
            })
            .collect())
    }

    fn type_spec(&mut self) -> Result<TypeSpec, ParseError> {
        let type_spec = match self.current.kind {
            TokenKind::IntegerType => TypeSpec::Integer,
            TokenKind::RealType => TypeSpec::Real,
            _ => return Err(self.unexpected(TokenKind::IntegerType)),
        };
        self.advance()?;
        Ok(type_spec)
    }

    /// `BEGIN statement_list END`
    pub(super) fn compound(&mut self) -> Result<Compound, ParseError> {
        self.nested(|p| {
            let start = p.eat(TokenKind::Begin)?.span;
            let statements = p.statement_list()?;
            let end = p.eat(TokenKind::End)?.span;

            Ok(Compound {
                statements,
                span: start.merge(end),
            })
        })
    }

    fn statement_list(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = vec![self.statement()?];

        while self.check(TokenKind::Semicolon) {
            self.advance()?;
            statements.push(self.statement()?);
        }

        // `x := 1 y := 2` is a missing separator, not the end of the list
        if self.check(TokenKind::Id) {
            return Err(SyntaxError::UnexpectedToken {
                expected: TokenKind::Semicolon,
                found: TokenKind::Id,
                span: self.current.span,
            }
            .into());
        }

        Ok(statements)
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current.kind {
            TokenKind::Begin => Ok(Stmt::Compound(self.compound()?)),
            TokenKind::Id => Ok(Stmt::Assign(self.assignment()?)),
            _ => Ok(Stmt::NoOp),
        }
    }

    fn assignment(&mut self) -> Result<Assign, ParseError> {
        let target = self.variable()?;
        self.eat(TokenKind::Assign)?;
        let expr = self.expr()?;

        Ok(Assign {
            span: target.span.merge(expr.span()),
            target,
            expr,
        })
    }

    pub(super) fn variable(&mut self) -> Result<Variable, ParseError> {
        let token = self.eat(TokenKind::Id)?;
        Ok(Variable {
            name: token.lexeme(),
            span: token.span,
        })
    }
}
