use color_print::cformat;
use hack_arch::{inst::Inst, word};

use crate::Program;

/// Listing rows: address, binary word, source line and the decoded instruction.
pub fn listing<S: AsRef<str>>(source: &[S], program: &Program) -> Vec<String> {
    let mut words = program
        .code
        .iter()
        .zip(&program.words)
        .enumerate()
        .peekable();

    let mut rows = vec![];
    for (idx, raw) in source.iter().enumerate() {
        let raw = raw.as_ref().trim_end();
        let mut emitted = false;
        while let Some((pc, (_, bin))) = words.next_if(|(_, (code, _))| code.line.idx == idx) {
            let inst = match Inst::from_bin(*bin) {
                Some(inst) => inst.cformat(),
                None => cformat!("<red,bold>????</>"),
            };
            let row = if emitted {
                format!("[{:04X}] {} | {:>4}  {:<32} {}", pc, word(*bin), "", "", inst)
            } else {
                format!("[{:04X}] {} | {:>4}: {:<32} {}", pc, word(*bin), idx + 1, raw, inst)
            };
            rows.push(row);
            emitted = true;
        }
        if !emitted {
            rows.push(format!("{:24}| {:>4}: {}", "", idx + 1, raw));
        }
    }
    rows
}

pub fn print_dump<S: AsRef<str>>(path: &str, source: &[S], program: &Program) {
    let rule = "-".repeat(24);
    println!("{}+------[{}]{}", rule, path, "-".repeat(45_usize.saturating_sub(path.len())));
    for row in listing(source, program) {
        println!("{}", row);
    }
    println!("{}+{}", rule, "-".repeat(53));
}
