use std::{path::PathBuf, process::ExitCode};

use color_print::cprintln;
use hackasm::{error::Error, listing};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: PathBuf,

    /// Output file [default: <INPUT> with extension .hack]
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write the symbol table as YAML
    #[clap(short, long)]
    symbols: Option<PathBuf>,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    let input = args.input.display().to_string();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.print_diag(&input);
            cprintln!("<red,bold>Failed</>: {}", input);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let input = args.input.display().to_string();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("hack"));

    println!("1. Read File");
    println!("  < {}", input);
    let source = hackasm::read_source(&args.input)?;

    println!("2. Expand Macros & Resolve Symbols");
    let program = hackasm::assemble(&source)?;
    for msg in &program.msgs {
        msg.print(&input);
    }
    println!("  - {} symbols", program.symbols.len());

    println!("3. Generate Binary");
    println!("  > {}", output.display());
    hackasm::write_binary(&output, &program)?;
    println!("  - {} words", program.words.len());

    if let Some(path) = &args.symbols {
        println!("  > {}", path.display());
        hackasm::write_symbols(path, &program.symbols)?;
    }

    if args.dump {
        listing::print_dump(&input, &source, &program);
    }

    Ok(())
}
