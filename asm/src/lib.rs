pub mod codegen;
pub mod error;
pub mod line;
pub mod listing;
pub mod macros;
pub mod msg;
pub mod parser;
pub mod resolve;
pub mod symbols;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use hack_arch::word;

use crate::{
    error::Error,
    line::Line,
    msg::Msg,
    parser::Code,
    resolve::{Located, Resolved},
    symbols::SymbolTable,
};

/// A translated program.
#[derive(Debug, Clone)]
pub struct Program {
    pub words: Vec<u16>,
    /// Instructions in word order, each with its source line
    pub code: Vec<Located<Code>>,
    pub symbols: SymbolTable,
    pub msgs: Vec<Msg>,
}

impl Program {
    /// One 16-character binary word per instruction.
    pub fn binary(&self) -> Vec<String> {
        self.words.iter().copied().map(word).collect()
    }
}

/// Normalize, expand macros, resolve symbols and generate code.
pub fn assemble<S: AsRef<str>>(source: &[S]) -> Result<Program, Error> {
    let mut expanded = vec![];
    for (idx, raw) in source.iter().enumerate() {
        let line = Line::new(idx, raw.as_ref());
        if line.is_empty() {
            continue;
        }
        expanded.extend(macros::expand(&line)?);
    }

    let Resolved {
        code,
        symbols,
        msgs,
    } = resolve::resolve(expanded)?;
    let words = codegen::generate(&code, &symbols)?;

    Ok(Program {
        words,
        code,
        symbols,
        msgs,
    })
}

pub fn translate<S: AsRef<str>>(source: &[S]) -> Result<Vec<String>, Error> {
    Ok(assemble(source)?.binary())
}

pub fn read_source(path: &Path) -> Result<Vec<String>, Error> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| Error::FileOpen(name.clone(), e))?;
    // Bytes outside UTF-8 decode to U+FFFD, which the normalizer drops.
    BufReader::new(file)
        .split(b'\n')
        .map(|line| {
            let line = line.map_err(|e| Error::FileRead(name.clone(), e))?;
            let line = String::from_utf8_lossy(&line);
            Ok(line.strip_suffix('\r').unwrap_or(&line).to_string())
        })
        .collect()
}

pub fn write_binary(path: &Path, program: &Program) -> Result<(), Error> {
    let name = path.display().to_string();
    let file = File::create(path).map_err(|e| Error::FileCreate(name.clone(), e))?;
    let mut writer = BufWriter::new(file);
    for bin in program.binary() {
        writeln!(writer, "{}", bin).map_err(|e| Error::FileWrite(name.clone(), e))?;
    }
    writer.flush().map_err(|e| Error::FileWrite(name, e))
}

pub fn write_symbols(path: &Path, symbols: &SymbolTable) -> Result<(), Error> {
    let name = path.display().to_string();
    let yaml = symbols.to_yaml()?;
    std::fs::write(path, yaml).map_err(|e| Error::FileWrite(name, e))
}

/// Translate the assembly file `input` into `output`, creating or overwriting it.
pub fn translate_file(input: &Path, output: &Path) -> Result<Program, Error> {
    let source = read_source(input)?;
    let program = assemble(&source)?;
    write_binary(output, &program)?;
    Ok(program)
}
