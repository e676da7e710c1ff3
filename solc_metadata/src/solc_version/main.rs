//!
//! The `solc` version reader binary.
//!

pub(crate) mod arguments;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let filter = if arguments.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let bytecode = match (arguments.bytecode, arguments.input_path) {
        (Some(bytecode), _) => bytecode
            .parse::<solc_metadata::Bytecode>()
            .context("Invalid hexadecimal bytecode")?,
        (None, Some(path)) => read_bytecode(path.as_path(), arguments.binary)?,
        (None, None) => anyhow::bail!("No bytecode provided. Pass a file path or `--bytecode`."),
    };

    let version = bytecode
        .solc_version()
        .context("Reading the solc version from the bytecode metadata")?;

    if arguments.quiet {
        println!("{version}");
    } else {
        println!(
            " {} solc version: {}",
            "Found".bright_green().bold(),
            version.to_string().bold()
        );
    }

    if let Some(expected) = arguments.expect {
        if expected != version {
            anyhow::bail!("Expected solc version {expected}, but the bytecode was compiled with {version}");
        }
    }

    Ok(())
}

///
/// Reads the bytecode from a file or the standard input.
///
fn read_bytecode(path: &Path, binary: bool) -> anyhow::Result<solc_metadata::Bytecode> {
    let mut data = Vec::new();
    if path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_end(&mut data)
            .context("Reading the standard input")?;
    } else {
        data = std::fs::read(path).with_context(|| format!("Reading input file {path:?}"))?;
    }

    if binary {
        return Ok(solc_metadata::Bytecode::from(data));
    }

    let text = String::from_utf8(data).with_context(|| format!("Input {path:?} is not UTF-8"))?;
    text.parse::<solc_metadata::Bytecode>()
        .with_context(|| format!("Input {path:?} is not hexadecimal bytecode"))
}
