//! exprcheck error handling - unified diagnostic API
//!
//! Every failure the recognizer can raise is a [`SyntaxError`]: one struct,
//! one kind enum, a span into the offending line. A failure is fatal to the
//! parse run that raised it; there is no recovery and no resynchronization.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::scanner::EOL;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// The named line of input a diagnostic points into.
///
/// Callers thread one of these into every parse run: the REPL uses
/// `<repl:N>` names, file mode uses `path:line`.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Convert to NamedSource for use with miette error reporting.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

// ============================================================================
// ERROR KIND - What went wrong
// ============================================================================

/// All failure shapes the recognizer distinguishes.
///
/// The first three are structural mismatches raised by the expect/consume
/// primitive; the rest are raised inside the lexical recognizers and
/// `primary`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("found '{found}', expected '{expected}'")]
    UnexpectedChar { found: char, expected: char },

    #[error("found end of line, expected '{expected}'")]
    UnexpectedEnd { expected: char },

    #[error("found '{found}', expected end of line")]
    TrailingInput { found: char },

    #[error("found {}, expected a digit", fmt_char(.found))]
    MalformedNumber { found: char },

    #[error("found {}, expected a letter or a digit", fmt_char(.found))]
    MalformedIdentifier { found: char },

    #[error("found {}, expected a digit or a letter or '+' or '-'", fmt_char(.found))]
    UnexpectedPrimary { found: char },
}

/// Coarse classification for test assertions and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The lookahead did not match a required literal character.
    Structural,
    /// An identifier or number run broke the separator rules.
    Lexical,
}

impl ErrorKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::UnexpectedChar { .. }
            | Self::UnexpectedEnd { .. }
            | Self::TrailingInput { .. }
            | Self::UnexpectedPrimary { .. } => ErrorClass::Structural,

            Self::MalformedNumber { .. } | Self::MalformedIdentifier { .. } => ErrorClass::Lexical,
        }
    }

    /// Get error code suffix for diagnostic codes.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::UnexpectedChar { .. } => "unexpected_char",
            Self::UnexpectedEnd { .. } => "unexpected_end",
            Self::TrailingInput { .. } => "trailing_input",
            Self::MalformedNumber { .. } => "malformed_number",
            Self::MalformedIdentifier { .. } => "malformed_identifier",
            Self::UnexpectedPrimary { .. } => "unexpected_primary",
        }
    }

    /// The character at the lookahead when the failure was raised.
    pub fn found(&self) -> char {
        match *self {
            Self::UnexpectedChar { found, .. }
            | Self::TrailingInput { found }
            | Self::MalformedNumber { found }
            | Self::MalformedIdentifier { found }
            | Self::UnexpectedPrimary { found } => found,
            Self::UnexpectedEnd { .. } => EOL,
        }
    }

    /// Human description of what the recognizer required instead.
    pub fn expected(&self) -> String {
        match self {
            Self::UnexpectedChar { expected, .. } | Self::UnexpectedEnd { expected } => {
                format!("'{expected}'")
            }
            Self::TrailingInput { .. } => "end of line".into(),
            Self::MalformedNumber { .. } => "a digit".into(),
            Self::MalformedIdentifier { .. } => "a letter or a digit".into(),
            Self::UnexpectedPrimary { .. } => "a digit or a letter or '+' or '-'".into(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::UnexpectedChar { .. } => "unexpected character",
            Self::UnexpectedEnd { .. } => "input ends here",
            Self::TrailingInput { .. } => "left over after the expression",
            Self::MalformedNumber { .. } => "number breaks off here",
            Self::MalformedIdentifier { .. } => "identifier breaks off here",
            Self::UnexpectedPrimary { .. } => "no operand starts here",
        }
    }
}

fn fmt_char(c: &char) -> String {
    if *c == EOL {
        "end of line".to_string()
    } else {
        format!("'{c}'")
    }
}

// ============================================================================
// SYNTAX ERROR - The single error type
// ============================================================================

/// A fatal parse failure: the kind, the line it happened in, and the span of
/// the offending character.
#[derive(Debug, Error)]
#[error("Syntax error: {kind}")]
pub struct SyntaxError {
    pub kind: ErrorKind,
    context: Arc<NamedSource<String>>,
    span: SourceSpan,
    code: String,
    help: Option<String>,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, context: &SourceContext, span: SourceSpan) -> Self {
        let code = format!("exprcheck::parse::{}", kind.code_suffix());
        let help = help_for(&kind);
        Self {
            kind,
            context: context.to_named_source(),
            span,
            code,
            help,
        }
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

fn help_for(kind: &ErrorKind) -> Option<String> {
    match kind {
        ErrorKind::MalformedNumber { .. } => {
            Some("underscores in a number must sit between digits".into())
        }
        ErrorKind::MalformedIdentifier { .. } => {
            Some("underscores in an identifier must sit between letters or digits".into())
        }
        ErrorKind::UnexpectedEnd { expected: ')' } => {
            Some("a parenthesized sub-expression is missing its closing parenthesis".into())
        }
        _ => None,
    }
}

impl Diagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.kind.label().into()), self.span);
        Some(Box::new(std::iter::once(label)))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.context)
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a SyntaxError with full miette diagnostics.
///
/// Use this for user-facing error display in CLI and REPL contexts.
pub fn print_error(error: SyntaxError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
