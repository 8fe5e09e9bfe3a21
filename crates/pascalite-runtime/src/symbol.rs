//! Symbol table for declared names
//!
//! Informational only: the interpreter never consults it.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Symbol information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// Name as declared
    pub name: String,
    pub kind: SymbolKind,
}

/// Symbol classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SymbolKind {
    /// Built-in type such as `INTEGER`
    BuiltinType,
    /// Declared variable and the name of its type
    Variable { type_name: String },
}

impl Symbol {
    pub fn builtin_type(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::BuiltinType,
        }
    }

    pub fn variable(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Variable {
                type_name: type_name.into(),
            },
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.kind, SymbolKind::Variable { .. })
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SymbolKind::BuiltinType => write!(f, "{} (builtin type)", self.name),
            SymbolKind::Variable { type_name } => write!(f, "{}: {}", self.name, type_name),
        }
    }
}

/// Symbol table keyed by case-folded name, kept in definition order
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    /// Create a new symbol table with the built-in types
    pub fn new() -> Self {
        let mut table = Self {
            symbols: Vec::new(),
            index: HashMap::new(),
        };
        table.define(Symbol::builtin_type("INTEGER"));
        table.define(Symbol::builtin_type("REAL"));
        table
    }

    /// Insert a symbol, replacing any existing one with the same folded name
    pub fn define(&mut self, symbol: Symbol) {
        let key = symbol.name.to_lowercase();
        match self.index.get(&key) {
            Some(&slot) => self.symbols[slot] = symbol,
            None => {
                self.index.insert(key, self.symbols.len());
                self.symbols.push(symbol);
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.index
            .get(&name.to_lowercase())
            .map(|&slot| &self.symbols[slot])
    }

    /// All symbols in definition order, built-ins first
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Declared variables in definition order
    pub fn variables(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().filter(|s| s.is_variable())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
