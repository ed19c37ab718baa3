use std::fmt;

use calc_lexer::Location;
use thiserror::Error;

/// The token a grammar level was looking for when it gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A `(` opener; reported for a `)` that closes nothing
    OpenParen,
    /// A `)` closing an open group
    CloseParen,
    /// The `;` ending a statement
    Semicolon,
    /// An integer literal operand
    IntLiteral,
}

impl Expected {
    /// The text shown to the user
    pub fn as_str(self) -> &'static str {
        match self {
            Expected::OpenParen => "(",
            Expected::CloseParen => ")",
            Expected::Semicolon => ";",
            Expected::IntLiteral => "int_literal",
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while evaluating a statement
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A grammar level found a token it cannot accept
    #[error("'{expected}' expected")]
    Expected {
        expected: Expected,
        location: Location,
    },

    /// Division, or a negative power of zero
    #[error("division by zero")]
    DivisionByZero { location: Location },

    /// An intermediate result or a literal does not fit in an `i64`
    #[error("integer overflow")]
    Overflow { location: Location },

    /// Parentheses or exponent chains nested deeper than the parser allows
    #[error("maximum nesting depth of {limit} exceeded")]
    NestingTooDeep { limit: usize, location: Location },
}

impl EvalError {
    /// Where the error was detected
    pub fn location(&self) -> Location {
        match self {
            EvalError::Expected { location, .. }
            | EvalError::DivisionByZero { location }
            | EvalError::Overflow { location }
            | EvalError::NestingTooDeep { location, .. } => *location,
        }
    }

    /// The missing token, for syntax errors
    pub fn expected(&self) -> Option<Expected> {
        match self {
            EvalError::Expected { expected, .. } => Some(*expected),
            _ => None,
        }
    }

    /// Returns true if the statement is malformed, as opposed to well formed
    /// but impossible to compute
    pub fn is_syntax(&self) -> bool {
        matches!(self, EvalError::Expected { .. })
    }
}

/// Result type for every grammar level
pub type EvalResult<T> = Result<T, EvalError>;

/// Arithmetic failure before a location is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fault {
    DivisionByZero,
    Overflow,
}

impl Fault {
    pub(crate) fn at(self, location: Location) -> EvalError {
        match self {
            Fault::DivisionByZero => EvalError::DivisionByZero { location },
            Fault::Overflow => EvalError::Overflow { location },
        }
    }
}
