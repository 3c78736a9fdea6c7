//! Recursive-descent recognizer for the arithmetic expression grammar.
//!
//! Grammar:
//!
//! ```text
//! expression : term   [ '+' expression ] | term [ '-' expression ]
//! term       : factor [ '*' term ] | factor [ '/' term ] | factor [ '%' term ]
//! factor     : power  [ '^' factor ]
//! power      : primary | '(' expression ')'
//! primary    : ident | number | '-' expression | '+' expression
//! ident      : letter { letter | digit | '_' letter | '_' digit }
//! number     : digit { digit | '_' digit }
//! ```
//!
//! Every operator tier chains by tail-recursing into its own rule, so
//! repetition is right-associative at every level: `a+b+c` is recognized as
//! `a+(b+c)`. This holds for the additive and multiplicative tiers as well
//! as for exponentiation and is a deliberate property of the grammar.
//!
//! The recognizer builds no syntax tree. What a run reports is the set of
//! lexemes it discovered and how deep the mutual recursion went; both flow
//! into an [`Outcome`] on success. Any mismatch is fatal to the run and
//! surfaces as a [`SyntaxError`].

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorKind, SourceContext, SyntaxError};
use crate::scanner::{Scanner, EOL};

const OPEN: char = '(';
const CLOSED: char = ')';

// ============================================================================
// PUBLIC API
// ============================================================================

/// Everything a successful parse reports back to the caller.
///
/// Lexemes appear in first-seen order with duplicates kept; sorting and
/// deduplication are presentation concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub identifiers: Vec<String>,
    pub numbers: Vec<String>,
    /// High-water mark of the recognizer call depth during the run.
    pub max_depth: usize,
}

/// Validate one line of input against the expression grammar.
///
/// A fresh parser is built per call, so no collection or counter state can
/// leak from one run into the next. The line terminator is the grammar's
/// closing symbol; a source without one is treated as ending in it.
pub fn parse_expression(
    source_text: &str,
    source_context: SourceContext,
) -> Result<Outcome, SyntaxError> {
    let mut parser = Parser::new(source_text, source_context);
    parser.expression()?;
    parser.expect(EOL)?;
    Ok(parser.into_outcome())
}

// ============================================================================
// PARSER - Per-run state and the expect/consume primitive
// ============================================================================

struct Parser<'src> {
    scanner: Scanner<'src>,
    context: SourceContext,
    identifiers: Vec<String>,
    numbers: Vec<String>,
    depth: usize,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    fn new(source_text: &'src str, context: SourceContext) -> Self {
        Self {
            scanner: Scanner::new(source_text),
            context,
            identifiers: Vec::new(),
            numbers: Vec::new(),
            depth: 0,
            max_depth: 0,
        }
    }

    fn into_outcome(self) -> Outcome {
        Outcome {
            identifiers: self.identifiers,
            numbers: self.numbers,
            max_depth: self.max_depth,
        }
    }

    fn fail(&self, kind: ErrorKind) -> SyntaxError {
        SyntaxError::new(kind, &self.context, self.scanner.span())
    }

    /// Depth bookkeeping shared by every recognizer: one entry, one level.
    /// The decrement runs on every exit path, early error returns included.
    fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            self.max_depth = self.depth;
        }
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Require `expected` at the lookahead and consume it, except that the
    /// line terminator is asserted without advancing past it. This is the
    /// sole raise-site for structural mismatches.
    fn expect(&mut self, expected: char) -> Result<(), SyntaxError> {
        let found = self.scanner.lookahead();
        if found != expected {
            let kind = if found == EOL {
                ErrorKind::UnexpectedEnd { expected }
            } else if expected == EOL {
                ErrorKind::TrailingInput { found }
            } else {
                ErrorKind::UnexpectedChar { found, expected }
            };
            return Err(self.fail(kind));
        }
        if expected != EOL {
            self.scanner.advance();
        }
        Ok(())
    }

    // ========================================================================
    // GRAMMAR RECOGNIZERS - one non-terminal each, mutually recursive
    // ========================================================================

    fn expression(&mut self) -> Result<(), SyntaxError> {
        self.nested(|p| {
            p.term()?;
            if p.scanner.lookahead() != EOL && matches!(p.scanner.lookahead(), '+' | '-') {
                p.scanner.advance();
                p.expression()?;
            }
            Ok(())
        })
    }

    fn term(&mut self) -> Result<(), SyntaxError> {
        self.nested(|p| {
            p.factor()?;
            if p.scanner.lookahead() != EOL && matches!(p.scanner.lookahead(), '*' | '/' | '%') {
                p.scanner.advance();
                p.term()?;
            }
            Ok(())
        })
    }

    fn factor(&mut self) -> Result<(), SyntaxError> {
        self.nested(|p| {
            p.power()?;
            if p.scanner.lookahead() != EOL && p.scanner.lookahead() == '^' {
                p.scanner.advance();
                p.factor()?;
            }
            Ok(())
        })
    }

    fn power(&mut self) -> Result<(), SyntaxError> {
        self.nested(|p| {
            if p.scanner.lookahead() == OPEN {
                p.scanner.advance();
                p.expression()?;
                p.expect(CLOSED)
            } else {
                p.primary()
            }
        })
    }

    fn primary(&mut self) -> Result<(), SyntaxError> {
        self.nested(|p| {
            let c = p.scanner.lookahead();
            if c.is_ascii_digit() {
                p.number()
            } else if c.is_ascii_alphabetic() {
                p.identifier()
            } else if c == '-' || c == '+' {
                // A sign produces no token; it re-enters the full grammar.
                p.scanner.advance();
                p.expression()
            } else {
                Err(p.fail(ErrorKind::UnexpectedPrimary { found: c }))
            }
        })
    }

    // ========================================================================
    // LEXICAL RECOGNIZERS - maximal runs with separator placement rules
    // ========================================================================

    /// Entered with the lookahead already known to be a letter. An
    /// underscore is only valid between body characters, so the run must not
    /// end on one and `__` never passes.
    fn identifier(&mut self) -> Result<(), SyntaxError> {
        self.nested(|p| {
            let mut lexeme = String::new();
            let mut prev;
            loop {
                prev = p.scanner.lookahead();
                lexeme.push(prev);
                p.scanner.advance();
                let next = p.scanner.lookahead();
                let continues =
                    next.is_ascii_alphanumeric() || (next == '_' && prev.is_ascii_alphanumeric());
                if !continues {
                    break;
                }
            }
            if prev == '_' {
                let found = p.scanner.lookahead();
                return Err(p.fail(ErrorKind::MalformedIdentifier { found }));
            }
            p.identifiers.push(lexeme);
            Ok(())
        })
    }

    /// Entered with the lookahead already known to be a digit. Same
    /// separator rules as identifiers, and a digit run must not butt up
    /// against a letter.
    fn number(&mut self) -> Result<(), SyntaxError> {
        self.nested(|p| {
            let mut lexeme = String::new();
            let mut prev;
            loop {
                prev = p.scanner.lookahead();
                lexeme.push(prev);
                p.scanner.advance();
                let next = p.scanner.lookahead();
                let continues = next.is_ascii_digit() || (next == '_' && prev.is_ascii_digit());
                if !continues {
                    break;
                }
            }
            let next = p.scanner.lookahead();
            if next.is_ascii_alphabetic() || prev == '_' {
                return Err(p.fail(ErrorKind::MalformedNumber { found: next }));
            }
            p.numbers.push(lexeme);
            Ok(())
        })
    }
}
