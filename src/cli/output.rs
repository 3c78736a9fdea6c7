//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for the success report, colorizing section
//! headers, and generating JSON. By centralizing presentation here, the
//! recognizer stays free of any ordering or deduplication policy: it hands
//! over lexemes in first-seen order and this module sorts them
//! case-insensitively and drops exact duplicates.

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::parser::Outcome;

// ============================================================================
// SUMMARY - presentation form of a successful parse
// ============================================================================

/// A parse outcome shaped for display: lexeme lists sorted case-insensitively
/// with exact duplicates suppressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub identifiers: Vec<String>,
    pub numbers: Vec<String>,
    pub max_depth: usize,
}

impl Summary {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        Self {
            identifiers: sorted_unique(&outcome.identifiers),
            numbers: sorted_unique(&outcome.numbers),
            max_depth: outcome.max_depth,
        }
    }
}

/// One checked line of a file, for the JSON report.
#[derive(Debug, Serialize)]
pub struct LineReport {
    pub line: usize,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Sorts lexemes by their ASCII-lowered form and drops exact duplicates.
///
/// Exact comparison breaks ties, so duplicates always end up adjacent and
/// `dedup` removes them all; `"A"` and `"a"` both survive.
pub fn sorted_unique(lexemes: &[String]) -> Vec<String> {
    let mut sorted = lexemes.to_vec();
    sorted.sort_by(|a, b| {
        a.to_ascii_lowercase()
            .cmp(&b.to_ascii_lowercase())
            .then_with(|| a.cmp(b))
    });
    sorted.dedup();
    sorted
}

// ============================================================================
// CORE OUTPUT FUNCTIONS - User-facing CLI output utilities
// ============================================================================

const IDENT_HEADER: &str = "Identifiers:\n------------";
const NUMBER_HEADER: &str = "Numbers:\n--------";
const NESTING_HEADER: &str = "Nesting level of calls:\n-----------------------";

fn stdout_color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints the success report to stdout with colored headers.
pub fn print_report(summary: &Summary) {
    let mut stdout = StandardStream::stdout(stdout_color_choice());

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    println!("The input expression is correct.");
    let _ = stdout.reset();

    if !summary.identifiers.is_empty() {
        print_header(&mut stdout, IDENT_HEADER);
        for identifier in &summary.identifiers {
            println!("{identifier}");
        }
    }

    if !summary.numbers.is_empty() {
        print_header(&mut stdout, NUMBER_HEADER);
        for number in &summary.numbers {
            println!("{number}");
        }
    }

    print_header(&mut stdout, NESTING_HEADER);
    println!("{}", summary.max_depth);
}

fn print_header(stdout: &mut StandardStream, text: &str) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    println!("{text}");
    let _ = stdout.reset();
}

/// Renders the same report uncolored, for the session transcript.
pub fn render_report(summary: &Summary) -> String {
    let mut out = String::from("The input expression is correct.\n");

    if !summary.identifiers.is_empty() {
        out.push_str(IDENT_HEADER);
        out.push('\n');
        for identifier in &summary.identifiers {
            out.push_str(identifier);
            out.push('\n');
        }
    }

    if !summary.numbers.is_empty() {
        out.push_str(NUMBER_HEADER);
        out.push('\n');
        for number in &summary.numbers {
            out.push_str(number);
            out.push('\n');
        }
    }

    out.push_str(NESTING_HEADER);
    out.push('\n');
    out.push_str(&summary.max_depth.to_string());
    out.push('\n');
    out
}
