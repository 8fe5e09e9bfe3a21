//! Name binding for declarations

use crate::ast::*;
use crate::symbol::{Symbol, SymbolTable};
use tracing::trace;

/// Builds a [`SymbolTable`] from a program's `VAR` section
pub struct Binder {
    symbol_table: SymbolTable,
}

impl Binder {
    /// Create a new binder
    pub fn new() -> Self {
        Self {
            symbol_table: SymbolTable::new(),
        }
    }

    /// Create a binder with an existing symbol table
    pub fn with_symbol_table(symbol_table: SymbolTable) -> Self {
        Self { symbol_table }
    }

    /// Define one variable symbol per declaration
    pub fn bind(mut self, program: &Program) -> SymbolTable {
        for decl in &program.block.declarations {
            self.bind_var_decl(decl);
        }
        self.symbol_table
    }

    fn bind_var_decl(&mut self, decl: &VarDecl) {
        let type_name = decl.type_spec.type_name();
        trace!(name = %decl.name.name, ty = type_name, "bind");
        self.symbol_table
            .define(Symbol::variable(decl.name.name.clone(), type_name));
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}
