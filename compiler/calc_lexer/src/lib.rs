//! Calc lexical analyzer
//!
//! This crate turns a single line of statement text into lexemes for the
//! evaluator. It also provides the lexical pre-pass that reports every
//! malformed lexeme on a line before any evaluation is attempted.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod scan;
pub mod token;

// Re-export the main types for convenience
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use scan::{is_blank, scan_line, LexicalError, Offense, OffenseKind};
pub use token::{Location, Token, TokenType};
