//! Statement execution

use crate::ast::*;
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use tracing::trace;

impl Interpreter {
    pub(super) fn exec_block(&self, block: &Block, env: &mut Environment) -> Result<(), RuntimeError> {
        for decl in &block.declarations {
            self.exec_var_decl(decl);
        }
        self.exec_compound(&block.body, env)
    }

    /// Declarations carry no runtime effect
    fn exec_var_decl(&self, decl: &VarDecl) {
        trace!(name = %decl.name.name, ty = decl.type_spec.type_name(), "declared");
    }

    fn exec_compound(&self, compound: &Compound, env: &mut Environment) -> Result<(), RuntimeError> {
        for stmt in &compound.statements {
            self.exec_stmt(stmt, env)?;
        }
        Ok(())
    }

    fn exec_stmt(&self, stmt: &Stmt, env: &mut Environment) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Compound(compound) => self.exec_compound(compound, env),
            Stmt::Assign(assign) => self.exec_assign(assign, env),
            Stmt::NoOp => Ok(()),
        }
    }

    fn exec_assign(&self, assign: &Assign, env: &mut Environment) -> Result<(), RuntimeError> {
        let value = self.eval_expr(&assign.expr, env)?;
        trace!(name = %assign.target.name, %value, "assign");
        env.set(&assign.target.name, value);
        Ok(())
    }
}
