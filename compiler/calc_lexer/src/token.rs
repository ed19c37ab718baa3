//! Token types and source locations

use std::fmt;

use crate::logos_token::LogosToken;

/// Represents a token's location in the source line.
///
/// This struct tracks the position of a token in the source text, including
/// line and column numbers (1-based) and the byte offset (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// The 1-based line number in the input file
    pub line: usize,
    /// The 1-based column number within the line
    pub column: usize,
    /// The 0-based byte offset from the start of the line
    pub offset: usize,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// Represents the kind of a lexeme.
///
/// `End` and `Error` are the two sentinels of the tokenizer: `End` means the
/// cursor reached the end of the line, `Error` means the character under the
/// cursor starts no lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Operators
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`
    Equal,
    /// `!`
    Bang,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    EqualEqual,
    /// `!=`
    NotEqual,

    // '='-extended forms that act as their first character
    /// `+=`, read as `+`
    PlusEqual,
    /// `-=`, read as `-`
    MinusEqual,
    /// `*=`, read as `*`
    StarEqual,
    /// `/=`, read as `/`
    SlashEqual,
    /// `^=`, read as `^`
    CaretEqual,
    /// `(=`, read as `(`
    LeftParenEqual,
    /// `)=`, read as `)`
    RightParenEqual,
    /// `;=`, read as `;`
    SemicolonEqual,

    // Punctuation
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `;`
    Semicolon,

    // Runs
    /// A run of digits
    IntLiteral,
    /// A run of letters; never valid in a statement
    Word,

    // Sentinels
    /// The cursor reached the end of the line
    End,
    /// A character that starts no lexeme
    Error,
}

impl TokenType {
    /// Returns true for the six comparison operators
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            TokenType::Less
                | TokenType::Greater
                | TokenType::LessEqual
                | TokenType::GreaterEqual
                | TokenType::EqualEqual
                | TokenType::NotEqual
        )
    }

    /// Returns true for the tokens the scan pass rejects
    pub fn is_lexical_error(self) -> bool {
        matches!(self, TokenType::Word | TokenType::Error)
    }

    /// The token this one stands for in the grammar.
    ///
    /// An `=`-extended operator or delimiter that is not a comparison is read
    /// as its first character, so `+=` is `+` and `;=` is `;`. Every other
    /// token stands for itself.
    pub fn head(self) -> TokenType {
        match self {
            TokenType::PlusEqual => TokenType::Plus,
            TokenType::MinusEqual => TokenType::Minus,
            TokenType::StarEqual => TokenType::Star,
            TokenType::SlashEqual => TokenType::Slash,
            TokenType::CaretEqual => TokenType::Caret,
            TokenType::LeftParenEqual => TokenType::LeftParen,
            TokenType::RightParenEqual => TokenType::RightParen,
            TokenType::SemicolonEqual => TokenType::Semicolon,
            other => other,
        }
    }
}

impl From<LogosToken> for TokenType {
    fn from(raw: LogosToken) -> Self {
        match raw {
            LogosToken::LessEqual => TokenType::LessEqual,
            LogosToken::GreaterEqual => TokenType::GreaterEqual,
            LogosToken::EqualEqual => TokenType::EqualEqual,
            LogosToken::NotEqual => TokenType::NotEqual,
            LogosToken::PlusEqual => TokenType::PlusEqual,
            LogosToken::MinusEqual => TokenType::MinusEqual,
            LogosToken::StarEqual => TokenType::StarEqual,
            LogosToken::SlashEqual => TokenType::SlashEqual,
            LogosToken::CaretEqual => TokenType::CaretEqual,
            LogosToken::LeftParenEqual => TokenType::LeftParenEqual,
            LogosToken::RightParenEqual => TokenType::RightParenEqual,
            LogosToken::SemicolonEqual => TokenType::SemicolonEqual,
            LogosToken::Plus => TokenType::Plus,
            LogosToken::Minus => TokenType::Minus,
            LogosToken::Star => TokenType::Star,
            LogosToken::Slash => TokenType::Slash,
            LogosToken::Caret => TokenType::Caret,
            LogosToken::Less => TokenType::Less,
            LogosToken::Greater => TokenType::Greater,
            LogosToken::Equal => TokenType::Equal,
            LogosToken::Bang => TokenType::Bang,
            LogosToken::LeftParen => TokenType::LeftParen,
            LogosToken::RightParen => TokenType::RightParen,
            LogosToken::Semicolon => TokenType::Semicolon,
            LogosToken::IntLiteral => TokenType::IntLiteral,
            LogosToken::Word => TokenType::Word,
            // Skipped by the automaton, never yielded.
            LogosToken::Whitespace => TokenType::End,
        }
    }
}

/// A lexeme borrowed from the line it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The type of the token
    pub token_type: TokenType,
    /// The original source text of the token; empty for `End`
    pub lexeme: &'src str,
    /// The location of the token in the source line
    pub location: Location,
}

impl<'src> Token<'src> {
    /// Creates a new token
    pub fn new(token_type: TokenType, lexeme: &'src str, location: Location) -> Self {
        Self {
            token_type,
            lexeme,
            location,
        }
    }

    /// Returns true if this token is of the given type
    pub fn is(&self, token_type: TokenType) -> bool {
        self.token_type == token_type
    }

    /// Returns true if this token stands for `token_type` in the grammar,
    /// counting `=`-extended forms as their first character
    pub fn acts_as(&self, token_type: TokenType) -> bool {
        self.token_type.head() == token_type
    }

    /// Returns true once the line is exhausted
    pub fn is_end(&self) -> bool {
        self.token_type == TokenType::End
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.token_type, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.line, self.column, self.offset)
    }
}
