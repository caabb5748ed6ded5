use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for the argot CLI
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parse tokens against a declared argument vocabulary"
)]
pub struct Cli {
    /// Path to the vocabulary document (JSON)
    pub schema: PathBuf,

    /// Tokens to parse against the vocabulary
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Output raw JSON
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Enable verbose debug output
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Suppress all output except errors and the parse result
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
