//! Command-line surface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions. All user-facing presentation lives in
//! [`output`]; the session log lives in [`transcript`].

use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};

use crate::{
    cli::output::{LineReport, Summary},
    errors::{print_error, SourceContext},
    parser::parse_expression,
    repl,
};

pub mod output;
pub mod transcript;

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "exprcheck",
    version,
    about = "A character-driven validator for arithmetic expressions."
)]
pub struct ExprArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Validate every non-blank line of a file, one expression per line.
    Check {
        /// The path to the file to validate.
        #[arg(required = true)]
        file: PathBuf,

        /// Emit the per-line summaries as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive validation session.
    Repl {
        /// Mirror prompts, input, and results to a transcript file.
        #[arg(long)]
        transcript: Option<PathBuf>,
    },
}

// ============================================================================
// MAIN ENTRY POINT - Direct library calls
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = ExprArgs::parse();

    match args.command {
        ArgsCommand::Check { file, json } => {
            let source = read_file_or_exit(&file);
            if !check_lines(&file, &source, json) {
                process::exit(1);
            }
        }

        ArgsCommand::Repl { transcript } => {
            repl::run_repl(transcript);
        }
    }
}

/// Validates each non-blank line independently; returns whether all passed.
fn check_lines(path: &Path, source: &str, json: bool) -> bool {
    let mut all_ok = true;
    let mut reports = Vec::new();

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        let name = format!("{}:{}", path.display(), line_number);
        match parse_expression(line, SourceContext::new(name.as_str(), line)) {
            Ok(outcome) => {
                if json {
                    reports.push(LineReport {
                        line: line_number,
                        summary: Summary::from_outcome(&outcome),
                    });
                } else {
                    println!("{name}: ok (nesting {})", outcome.max_depth);
                }
            }
            Err(error) => {
                all_ok = false;
                print_error(error);
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(&reports) {
            Ok(rendered) => println!("{rendered}"),
            Err(error) => {
                eprintln!("Failed to render JSON report: {error}");
                return false;
            }
        }
    }

    all_ok
}

fn read_file_or_exit(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|error| {
        eprintln!("Failed to read {}: {}", path.display(), error);
        process::exit(1);
    })
}
