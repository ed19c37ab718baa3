//! Lexer implementation for calc statements
//! Holds the cursor over one line and hands out one token per call

use logos::Logos;
use std::ops::Range;

use crate::token::{Location, Token, TokenType};
use crate::LogosToken;

/// The cursor over a line of input.
///
/// Every call to [`Lexer::next_token`] consumes the whitespace in front of
/// the cursor and the lexeme that follows it. The cursor never moves
/// backwards; [`Lexer::reset`] starts over from the beginning of the line.
pub struct Lexer<'a> {
    /// The line being lexed
    source: &'a str,
    /// Line number reported for the first character of `source`
    first_line: usize,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset `line` and `column` describe
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer positioned at the start of `source`
    pub fn new(source: &'a str) -> Self {
        Self::with_line(source, 1)
    }

    /// Create a new lexer whose locations report `line` as the line number
    pub fn with_line(source: &'a str, line: usize) -> Self {
        Self {
            source,
            first_line: line,
            line,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
        }
    }

    /// The full line this lexer reads from
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The unconsumed suffix of the line
    pub fn remaining(&self) -> &'a str {
        self.inner.remainder()
    }

    /// Move the cursor back to the start of the line
    pub fn reset(&mut self) {
        *self = Self::with_line(self.source, self.first_line);
    }

    /// Produce the next token and advance past it.
    ///
    /// Returns a `TokenType::End` token once the line is exhausted, and keeps
    /// returning it on every later call. A character that starts no lexeme
    /// comes back as a single-character `TokenType::Error` token and the
    /// cursor moves past it, so scanning always makes progress.
    pub fn next_token(&mut self) -> Token<'a> {
        let Some(result) = self.inner.next() else {
            self.sync_position_to(self.source.len());
            return Token::new(TokenType::End, "", self.location());
        };

        let span = self.inner.span();
        self.sync_position_to(span.start);
        let location = self.location();

        let token = match result {
            Ok(raw) => Token::new(TokenType::from(raw), self.inner.slice(), location),
            Err(()) => Token::new(TokenType::Error, self.unrecognized(span), location),
        };

        #[cfg(feature = "logging")]
        log::trace!("lexed {} {:?}", token, token.lexeme);

        token
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// The single character at the start of an error span
    fn unrecognized(&self, span: Range<usize>) -> &'a str {
        let source = self.source;
        source
            .get(span.start..)
            .and_then(|rest| rest.chars().next())
            .and_then(|c| source.get(span.start..span.start + c.len_utf8()))
            .unwrap_or("")
    }

    /// Advance line and column over the text between the last known offset
    /// and `target`, counting characters rather than bytes
    fn sync_position_to(&mut self, target: usize) {
        if let Some(text) = self.source.get(self.offset..target) {
            for c in text.chars() {
                if c == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
        }
        self.offset = target;
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token up to, but not including, the end of the line
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}
