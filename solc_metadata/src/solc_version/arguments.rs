//!
//! The `solc` version reader arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The `solc` version reader arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Path to a file with the hexadecimal bytecode.
    /// Use `-` to read the standard input.
    #[arg(conflicts_with = "bytecode")]
    pub input_path: Option<PathBuf>,

    /// The hexadecimal bytecode passed inline.
    #[arg(long)]
    pub bytecode: Option<String>,

    /// Treats the input file as raw binary bytecode instead of hexadecimal text.
    #[arg(long, requires = "input_path")]
    pub binary: bool,

    /// Fails if the resolved version differs from the expected one.
    #[arg(long)]
    pub expect: Option<solc_metadata::SolcVersion>,

    /// Prints the trailer and decoding diagnostics.
    #[arg(short, long)]
    pub verbose: bool,

    /// Prints only the version.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
