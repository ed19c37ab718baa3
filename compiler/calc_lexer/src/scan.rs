//! Lexical pre-pass over a whole line.
//!
//! The scan walks every token on the line before any evaluation happens, so
//! that all malformed lexemes are found even when the first one would have
//! stopped the parser. Only one representative is reported per line.

use thiserror::Error;

use crate::lexer::Lexer;
use crate::token::{Location, TokenType};

/// What made a lexeme unacceptable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffenseKind {
    /// A run of letters; names are not part of the language
    Word,
    /// A character that starts no lexeme
    UnknownCharacter,
}

/// One malformed lexeme found by the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offense {
    /// Why the lexeme was rejected
    pub kind: OffenseKind,
    /// The offending text
    pub lexeme: String,
    /// Where the offending text starts
    pub location: Location,
}

/// A line that contains at least one malformed lexeme
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a lexeme: '{lexeme}' at {location}")]
pub struct LexicalError {
    /// Why the reported lexeme was rejected
    pub kind: OffenseKind,
    /// The lexeme reported for the line
    pub lexeme: String,
    /// Location of the reported lexeme
    pub location: Location,
    /// Every offense on the line, in source order
    pub offenses: Vec<Offense>,
}

impl LexicalError {
    /// Pick the reported offense from a non-empty list.
    ///
    /// The most recent word wins over unknown characters; without any word,
    /// the most recent unknown character is reported.
    fn from_offenses(offenses: Vec<Offense>) -> Option<Self> {
        let representative = offenses
            .iter()
            .rev()
            .find(|o| o.kind == OffenseKind::Word)
            .or_else(|| offenses.last())?;

        Some(Self {
            kind: representative.kind,
            lexeme: representative.lexeme.clone(),
            location: representative.location,
            offenses,
        })
    }
}

/// Scan `line` for malformed lexemes.
///
/// The scan uses its own cursor and keeps going after an offense, so every
/// malformed lexeme on the line is collected. The verdict depends only on
/// `line`; scanning the same line twice gives the same answer.
pub fn scan_line(line: &str) -> Result<(), LexicalError> {
    let offenses: Vec<Offense> = Lexer::new(line)
        .filter(|token| token.token_type.is_lexical_error())
        .map(|token| Offense {
            kind: match token.token_type {
                TokenType::Word => OffenseKind::Word,
                _ => OffenseKind::UnknownCharacter,
            },
            lexeme: token.lexeme.to_string(),
            location: token.location,
        })
        .collect();

    match LexicalError::from_offenses(offenses) {
        None => Ok(()),
        Some(err) => {
            #[cfg(feature = "logging")]
            log::debug!("{} malformed lexeme(s) in {:?}", err.offenses.len(), line);
            Err(err)
        }
    }
}

/// Returns true if `line` holds nothing but whitespace and control
/// characters (space, tab, newline, carriage return, NUL, vertical tab,
/// backspace, form feed, bell).
pub fn is_blank(line: &str) -> bool {
    line.chars().all(|c| {
        matches!(
            c,
            ' ' | '\t' | '\n' | '\r' | '\0' | '\u{b}' | '\u{8}' | '\u{c}' | '\u{7}'
        )
    })
}
