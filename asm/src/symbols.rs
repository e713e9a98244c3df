use hack_arch::reg::{BUILTINS, VAR_BASE};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Builtin,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub kind: Kind,
    pub addr: u16,
}

/// Symbol name to address, in definition order.
///
/// Built fresh for every translation; seeded with the predefined registers and I/O bases.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    table: IndexMap<String, Symbol>,
    next_var: u16,
}

impl SymbolTable {
    pub fn new() -> Self {
        let table = BUILTINS
            .iter()
            .map(|(name, addr)| {
                let symbol = Symbol {
                    kind: Kind::Builtin,
                    addr: *addr,
                };
                (name.clone(), symbol)
            })
            .collect();
        SymbolTable {
            table,
            next_var: VAR_BASE,
        }
    }

    /// Bind a label, returning the symbol it replaced.
    pub fn define_label(&mut self, name: &str, addr: u16) -> Option<Symbol> {
        let symbol = Symbol {
            kind: Kind::Label,
            addr,
        };
        self.table.insert(name.to_string(), symbol)
    }

    /// Address of `name`, allocating the next variable slot on first use.
    pub fn allocate(&mut self, name: &str) -> u16 {
        if let Some(symbol) = self.table.get(name) {
            return symbol.addr;
        }
        let addr = self.next_var;
        self.next_var = self.next_var.wrapping_add(1);
        let symbol = Symbol {
            kind: Kind::Variable,
            addr,
        };
        self.table.insert(name.to_string(), symbol);
        addr
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.table.get(name)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.table.get(name).map(|symbol| symbol.addr)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.table.iter().map(|(name, symbol)| (name.as_str(), symbol))
    }

    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(&self.table).map_err(Error::SymbolDump)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
