//! Rendering of per-line results into the output file format.

use std::fmt;

use calc_lexer::LexicalError;
use calc_parser::{EvalError, Expected};

/// The result of interpreting one non-blank line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The scan found a malformed lexeme; nothing was evaluated
    Lexical(LexicalError),
    /// The first statement evaluated to a value
    Value(i64),
    /// The first statement could not be evaluated
    Failed(EvalError),
    /// The lexemes of the line, one statement per row
    Tokens(String),
}

impl LineOutcome {
    /// Returns true if the line produced an error block
    pub fn is_error(&self) -> bool {
        matches!(self, LineOutcome::Lexical(_) | LineOutcome::Failed(_))
    }
}

/// Text shown inside `'...' expected`.
///
/// Delimiters are shown as the single character; longer names in full.
pub fn expected_text(expected: Expected) -> &'static str {
    let text = expected.as_str();
    if text.len() <= 2 {
        &text[..1]
    } else {
        text
    }
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineOutcome::Lexical(err) => {
                writeln!(f, "===> '{}'", err.lexeme)?;
                writeln!(f, "Lexical error: not a lexeme")?;
            }
            LineOutcome::Value(value) => {
                writeln!(f, "Syntax OK")?;
                writeln!(f, "Value is {value}")?;
            }
            LineOutcome::Failed(err) => match err.expected() {
                Some(expected) => {
                    writeln!(f, "===> '{}' expected", expected_text(expected))?;
                    writeln!(f, "Syntax Error")?;
                }
                None => {
                    writeln!(f, "===> {err}")?;
                    writeln!(f, "Runtime Error")?;
                }
            },
            LineOutcome::Tokens(listing) => f.write_str(listing)?,
        }
        writeln!(f)
    }
}
