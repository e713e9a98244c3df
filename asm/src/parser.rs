use hack_arch::{alu::Comp, cond::Jump, inst::Inst, reg::Dest};

use crate::{
    error::Error,
    line::Line,
    macros::{is_label, split_fields},
    symbols::SymbolTable,
};

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Label(String),
    Code(Code),
}

impl Stmt {
    pub fn parse(line: &Line) -> Result<Stmt, Error> {
        let code = line.code.as_str();

        // (LOOP)
        if is_label(code) {
            let name = &code[1..code.len() - 1];
            if !is_ident(name) {
                return Err(Error::format(line, format!("Invalid label: `{name}`")));
            }
            return Ok(Stmt::Label(name.to_string()));
        }

        match Code::parse(code) {
            Ok(code) => Ok(Stmt::Code(code)),
            Err(reason) => Err(Error::format(line, reason)),
        }
    }
}

// ----------------------------------------------------------------------------
// Instruction

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    Addr(Imm),
    Calc(Dest, Comp, Jump),
}

impl Code {
    fn parse(code: &str) -> Result<Code, String> {
        // @value
        if let Some(operand) = code.strip_prefix('@') {
            return Ok(Code::Addr(Imm::parse(operand)?));
        }

        // dest=comp;jump
        let (dest, comp, jump) = split_fields(code);
        Ok(Code::Calc(
            Dest::parse(dest)?,
            Comp::parse(comp)?,
            Jump::parse(jump)?,
        ))
    }

    pub fn resolve(&self, symbols: &SymbolTable) -> Result<Inst, Error> {
        match self {
            Code::Addr(imm) => Ok(Inst::Addr(imm.resolve(symbols)?)),
            Code::Calc(dest, comp, jump) => Ok(Inst::Calc(*dest, *comp, *jump)),
        }
    }
}

// ----------------------------------------------------------------------------
// Operand of an address load

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imm {
    Literal(u16),
    Ident(String),
}

impl Imm {
    fn parse(s: &str) -> Result<Imm, String> {
        if s.is_empty() {
            return Err("Missing address operand".to_string());
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Imm::Literal(parse_numeral(s)));
        }
        if is_ident(s) {
            return Ok(Imm::Ident(s.to_string()));
        }
        Err(format!("Invalid symbol: `{s}`"))
    }

    pub fn resolve(&self, symbols: &SymbolTable) -> Result<u16, Error> {
        match self {
            Imm::Literal(v) => Ok(*v),
            Imm::Ident(name) => symbols
                .get_val(name)
                .ok_or_else(|| Error::Lookup(name.clone())),
        }
    }
}

/// Decimal numeral truncated to the 16-bit word.
fn parse_numeral(s: &str) -> u16 {
    s.bytes().fold(0u16, |acc, b| {
        acc.wrapping_mul(10).wrapping_add((b - b'0') as u16)
    })
}

/// Letters, digits, `_`, `.` and `$`, not starting with a digit.
///
/// `:` is reserved for the labeled jump shorthand.
pub fn is_ident(s: &str) -> bool {
    match s.chars().next() {
        Some(head) if !head.is_ascii_digit() => s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$')),
        _ => false,
    }
}
