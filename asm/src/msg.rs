use color_print::cprintln;

use crate::{error, line::Line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgKind {
    Warn,
    Note,
}

/// A non-fatal diagnostic attached to a source line.
#[derive(Debug, Clone)]
pub struct Msg {
    pub kind: MsgKind,
    pub msg: String,
    pub line: Line,
}

impl Msg {
    pub fn warn(msg: String, line: &Line) -> Self {
        Msg {
            kind: MsgKind::Warn,
            msg,
            line: line.clone(),
        }
    }

    pub fn note(msg: String, line: &Line) -> Self {
        Msg {
            kind: MsgKind::Note,
            msg,
            line: line.clone(),
        }
    }

    pub fn print(&self, file: &str) {
        match self.kind {
            MsgKind::Warn => cprintln!("<yellow,bold>warn</>: {}", self.msg),
            MsgKind::Note => cprintln!("<green,bold>note</>: {}", self.msg),
        }
        error::pointer(file, self.line.no(), &self.line.raw);
    }
}
