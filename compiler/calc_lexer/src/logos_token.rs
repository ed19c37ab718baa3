//! Raw logos token definitions

use logos::Logos;

/// Raw token type produced by the logos automaton.
///
/// Any operator or delimiter character followed by `=` lexes as one
/// two-character token. The two-character forms are listed before their
/// one-character heads; logos always prefers the longest match, so `<=`
/// never lexes as `<` followed by `=`. Digits never take a trailing `=`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogosToken {
    // --- Relational operators (two characters) ---
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    NotEqual,

    // --- Other '='-extended forms ---
    /// `+=`
    #[token("+=")]
    PlusEqual,
    /// `-=`
    #[token("-=")]
    MinusEqual,
    /// `*=`
    #[token("*=")]
    StarEqual,
    /// `/=`
    #[token("/=")]
    SlashEqual,
    /// `^=`
    #[token("^=")]
    CaretEqual,
    /// `(=`
    #[token("(=")]
    LeftParenEqual,
    /// `)=`
    #[token(")=")]
    RightParenEqual,
    /// `;=`
    #[token(";=")]
    SemicolonEqual,

    // --- Operators ---
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equal,
    /// `!`
    #[token("!")]
    Bang,

    // --- Delimiters ---
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `;`
    #[token(";")]
    Semicolon,

    // --- Runs ---
    /// A run of ASCII digits
    #[regex(r"[0-9]+")]
    IntLiteral,
    /// A run of ASCII letters
    #[regex(r"[a-zA-Z]+")]
    Word,

    /// Space, tab, newline and carriage return; skipped
    // Only these four characters separate lexemes; other control
    // characters are reported as unrecognized input.
    #[regex(r"[ \t\n\r]+", logos::skip)]
    Whitespace,
}
