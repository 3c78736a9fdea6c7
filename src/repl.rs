//! exprcheck REPL (read-validate-print loop)
//!
//! Interactive shell following the classic session protocol: prompt for an
//! expression, validate it, report, then ask whether to continue. Each line
//! is an independent parse run; nothing carries over but the line counter
//! used to name diagnostic sources.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use crate::cli::output::{print_report, render_report, Summary};
use crate::cli::transcript::Transcript;
use crate::errors::{print_error, SourceContext, SyntaxError};
use crate::parser::parse_expression;

/// REPL state that persists across evaluations.
pub struct ReplState {
    line_number: usize,
}

impl ReplState {
    pub fn new() -> Self {
        Self { line_number: 1 }
    }

    /// Validate one entered line in a fresh parse run.
    pub fn eval_line(&mut self, input: &str) -> Result<Summary, SyntaxError> {
        let source_name = format!("<repl:{}>", self.line_number);
        self.line_number += 1;
        parse_expression(input, SourceContext::new(source_name, input))
            .map(|outcome| Summary::from_outcome(&outcome))
    }
}

impl Default for ReplState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main REPL entry point.
pub fn run_repl(transcript_path: Option<PathBuf>) {
    let mut transcript = transcript_path.map(|path| {
        Transcript::create(&path).unwrap_or_else(|error| {
            eprintln!("Failed to create transcript {}: {}", path.display(), error);
            process::exit(1);
        })
    });

    println!("exprcheck {}", env!("CARGO_PKG_VERSION"));
    println!("One arithmetic expression per line; answer 'y' to keep going.");
    println!();

    let mut state = ReplState::new();

    loop {
        print!("Enter arithmetic expression: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                // EOF (Ctrl+D)
                println!();
                break;
            }
            Ok(_) => {}
            Err(error) => {
                eprintln!("Failed to read input: {error}");
                break;
            }
        }
        let line = line.trim_end();
        record(&mut transcript, &format!("Enter arithmetic expression: {line}"));

        match state.eval_line(line) {
            Ok(summary) => {
                record(&mut transcript, render_report(&summary).trim_end());
                print_report(&summary);
            }
            Err(error) => {
                record(&mut transcript, &error.to_string());
                print_error(error);
            }
        }
        record(&mut transcript, "");

        print!("Press 'y' to continue: ");
        let _ = io::stdout().flush();

        let mut choice = String::new();
        match io::stdin().read_line(&mut choice) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) if choice.trim() == "y" => continue,
            _ => break,
        }
    }
}

fn record(transcript: &mut Option<Transcript>, text: &str) {
    if let Some(log) = transcript {
        if let Err(error) = log.record(text) {
            eprintln!("Failed to write transcript: {error}");
        }
    }
}
