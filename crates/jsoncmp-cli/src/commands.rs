use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;

use jsoncmp_core::{AnalyzeOptions, Analyzer, RenderOptions};

use crate::cli::*;
use crate::render::render_text;
use crate::samples::{EXAMPLE_CONFIGURATION, EXAMPLE_PAYLOAD};

/// How a successful command ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report (or no comparison performed).
    Clean,
    /// The comparison found differences.
    Differences,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Clean => ExitCode::SUCCESS,
            Self::Differences => ExitCode::from(1),
        }
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<Outcome> {
    match cli.command {
        Command::Compare(args) => cmd_compare(args, &cli.format),
        Command::Example(args) => cmd_example(args),
    }
}

fn cmd_compare(args: CompareArgs, format: &OutputFormat) -> anyhow::Result<Outcome> {
    let payload = read_source(&args.payload)?;
    let config = match &args.config {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read configuration {}", path.display()))?,
        ),
        None => None,
    };

    let analyzer = Analyzer::with_options(AnalyzeOptions {
        render: RenderOptions {
            expected_label: args.expected_label,
            actual_label: args.actual_label,
        },
    });
    let result = analyzer.analyze(&payload, config.as_deref())?;
    debug!(differences = result.differences.len(), "comparison finished");

    match format {
        OutputFormat::Text => print!("{}", render_text(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(if result.is_match() {
        Outcome::Clean
    } else {
        Outcome::Differences
    })
}

fn cmd_example(args: ExampleArgs) -> anyhow::Result<Outcome> {
    if args.config {
        println!("{EXAMPLE_CONFIGURATION}");
    } else {
        println!("{EXAMPLE_PAYLOAD}");
    }
    Ok(Outcome::Clean)
}

/// Read a payload from a file path, or from stdin when the path is `-`.
fn read_source(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read payload from stdin")?;
        return Ok(text);
    }
    let path = Path::new(source);
    fs::read_to_string(path).with_context(|| format!("failed to read payload {}", path.display()))
}
