use crate::{error::Error, parser::Code, resolve::Located, symbols::SymbolTable};

/// Encode every instruction into a machine word.
pub fn generate(code: &[Located<Code>], symbols: &SymbolTable) -> Result<Vec<u16>, Error> {
    code.iter()
        .map(|code| code.item.resolve(symbols).map(|inst| inst.to_bin()))
        .collect()
}
