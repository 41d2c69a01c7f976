use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jsoncmp",
    about = "JSON Comparator: structural diff of expected vs actual documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the expected and actual sections of a payload
    Compare(CompareArgs),
    /// Print the bundled example payload or configuration
    Example(ExampleArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Payload file, or `-` for stdin
    pub payload: String,
    /// Configuration file holding `ignore_paths` arrays
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long, default_value = "expected.json")]
    pub expected_label: String,
    #[arg(long, default_value = "actual.json")]
    pub actual_label: String,
}

#[derive(Args)]
pub struct ExampleArgs {
    /// Print the example configuration instead of the payload
    #[arg(long)]
    pub config: bool,
}
