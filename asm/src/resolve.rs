use std::collections::HashMap;

use crate::{
    error::Error,
    line::Line,
    msg::Msg,
    parser::{Code, Imm, Stmt},
    symbols::{Kind, SymbolTable},
};

/// An item together with the source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T> {
    pub line: Line,
    pub item: T,
}

/// Output of the first pass.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub code: Vec<Located<Code>>,
    pub symbols: SymbolTable,
    pub msgs: Vec<Msg>,
}

/// Build the symbol table from fully expanded lines and drop the label declarations.
///
/// Labels are bound first, to the number of instructions preceding them, so that
/// variable allocation never hands out a name that is declared later as a label.
pub fn resolve(lines: Vec<Line>) -> Result<Resolved, Error> {
    let stmts = lines
        .into_iter()
        .map(|line| {
            let item = Stmt::parse(&line)?;
            Ok(Located { line, item })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let mut symbols = SymbolTable::new();
    let mut msgs = vec![];

    // Labels
    let mut defined: HashMap<&str, &Line> = HashMap::new();
    let mut pc: u16 = 0;
    let mut full = false;
    let mut overflowed = false;
    for stmt in &stmts {
        match &stmt.item {
            Stmt::Code(_) => {
                if full && !overflowed {
                    msgs.push(Msg::warn(
                        "Program exceeds 65536 instructions; addresses wrap around".to_string(),
                        &stmt.line,
                    ));
                    overflowed = true;
                }
                let (next, wrapped) = pc.overflowing_add(1);
                pc = next;
                full |= wrapped;
            }
            Stmt::Label(name) => {
                if let Some(prev) = symbols.define_label(name, pc) {
                    match prev.kind {
                        Kind::Builtin => msgs.push(Msg::warn(
                            format!("Label `{name}` overrides a predefined symbol"),
                            &stmt.line,
                        )),
                        _ => {
                            msgs.push(Msg::warn(
                                format!("Re-defined label: `{name}`"),
                                &stmt.line,
                            ));
                            if let Some(prev_line) = defined.get(name.as_str()) {
                                msgs.push(Msg::note(
                                    "Already defined here. The value has been overridden."
                                        .to_string(),
                                    prev_line,
                                ));
                            }
                        }
                    }
                }
                defined.insert(name.as_str(), &stmt.line);
            }
        }
    }

    // Variables
    let mut code = Vec::with_capacity(stmts.len());
    for Located { line, item } in stmts {
        match item {
            Stmt::Label(_) => continue,
            Stmt::Code(item) => {
                if let Code::Addr(Imm::Ident(name)) = &item {
                    symbols.allocate(name);
                }
                code.push(Located { line, item });
            }
        }
    }

    Ok(Resolved {
        code,
        symbols,
        msgs,
    })
}
