use color_print::cprintln;
use thiserror::Error;

use crate::line::Line;

#[derive(Error, Debug)]
pub enum Error {
    /// `line` is the 0-based index of the source line.
    #[error("Cannot parse line {line}: `{text}` ({reason})")]
    Format {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("Undefined symbol: `{0}`")]
    Lookup(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol table")]
    SymbolDump(#[source] serde_yaml::Error),
}

impl Error {
    pub fn format(line: &Line, reason: impl Into<String>) -> Self {
        Error::Format {
            line: line.idx,
            text: line.raw.clone(),
            reason: reason.into(),
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str) {
        match self {
            Error::Format { line, text, reason } => {
                cprintln!("<red,bold>error</>: {}", reason);
                pointer(file, line + 1, text);
            }
            _ => cprintln!("<red,bold>error</>: {}", self),
        }
    }
}

/// Print the `--> file:line` pointer and the source line below a message.
pub(crate) fn pointer(file: &str, line_no: usize, raw: &str) {
    cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_no);
    cprintln!("      <blue>|</>");
    cprintln!(" <blue>{:>4} |</> {}", line_no, raw);
    cprintln!("      <blue>|</>");
}
