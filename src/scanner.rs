//! Character scanner: single-character lookahead with blank skipping.
//!
//! The scanner owns the cursor every recognizer reads. Blanks are discarded
//! before they ever become the lookahead, so the grammar layer never sees
//! one. The line terminator is an ordinary lookahead value, never skipped;
//! when the source runs out before a terminator, one is synthesized so the
//! grammar's final assertion still has something to match.

use std::str::CharIndices;

use miette::SourceSpan;

/// The grammar's required terminal symbol.
pub const EOL: char = '\n';

const BLANK: char = ' ';

pub struct Scanner<'src> {
    chars: CharIndices<'src>,
    len: usize,
    lookahead: char,
    offset: usize,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner primed with the first non-blank character.
    pub fn new(source: &'src str) -> Self {
        let mut scanner = Self {
            chars: source.char_indices(),
            len: source.len(),
            lookahead: EOL,
            offset: 0,
        };
        scanner.advance();
        scanner
    }

    /// The first character not yet consumed by any recognizer.
    pub fn lookahead(&self) -> char {
        self.lookahead
    }

    /// Byte span of the lookahead within the source line, for diagnostics.
    pub fn span(&self) -> SourceSpan {
        if self.offset >= self.len {
            (self.len, 0).into()
        } else {
            (self.offset, self.lookahead.len_utf8()).into()
        }
    }

    /// Consumes exactly one character and makes it the lookahead; blanks are
    /// discarded and the read repeats until a non-blank character or the end
    /// of the line is obtained.
    pub fn advance(&mut self) {
        loop {
            match self.chars.next() {
                Some((_, BLANK)) => continue,
                Some((offset, c)) => {
                    self.offset = offset;
                    self.lookahead = c;
                    break;
                }
                None => {
                    self.offset = self.len;
                    self.lookahead = EOL;
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blanks_between_characters() {
        let mut scanner = Scanner::new("a   +b");
        assert_eq!(scanner.lookahead(), 'a');
        scanner.advance();
        assert_eq!(scanner.lookahead(), '+');
        scanner.advance();
        assert_eq!(scanner.lookahead(), 'b');
    }

    #[test]
    fn leading_blanks_are_discarded_when_priming() {
        let scanner = Scanner::new("   7");
        assert_eq!(scanner.lookahead(), '7');
    }

    #[test]
    fn terminator_is_a_valid_lookahead() {
        let mut scanner = Scanner::new("x\n");
        scanner.advance();
        assert_eq!(scanner.lookahead(), EOL);
    }

    #[test]
    fn exhausted_source_synthesizes_the_terminator() {
        let mut scanner = Scanner::new("x");
        scanner.advance();
        assert_eq!(scanner.lookahead(), EOL);
        scanner.advance();
        assert_eq!(scanner.lookahead(), EOL);
    }

    #[test]
    fn blank_only_source_scans_to_the_terminator() {
        let scanner = Scanner::new("    ");
        assert_eq!(scanner.lookahead(), EOL);
    }

    #[test]
    fn span_points_at_the_lookahead() {
        let mut scanner = Scanner::new("ab");
        assert_eq!(scanner.span(), (0, 1).into());
        scanner.advance();
        assert_eq!(scanner.span(), (1, 1).into());
        scanner.advance();
        assert_eq!(scanner.span(), (2, 0).into());
    }
}
