use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mips_asm::{Assembler, Catalog};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Encode one MIPS instruction line as a 32-bit machine word"
)]
struct Opts {
    /// Instruction line, e.g. "add $t0, $t1, $t2"
    #[arg(value_name = "INSTRUCTION")]
    instruction: String,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Hex)]
    format: OutputFormat,
    /// JSON file of extra catalog entries (Vec<{ mnemonic, opcode, funct?, kind }>)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Hex,
    Binary,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    let custom;
    let catalog = match &opts.catalog {
        Some(path) => {
            let txt = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            custom = Catalog::from_json(&txt)
                .with_context(|| format!("loading catalog {}", path.display()))?;
            &custom
        }
        None => Catalog::builtin(),
    };

    let enc = Assembler::new(catalog).encode(&opts.instruction)?;
    match opts.format {
        OutputFormat::Hex => println!("{}", enc.word),
        OutputFormat::Binary => println!("{}", enc.binary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&enc)?),
    }

    Ok(())
}
