// Recursive-descent evaluator for calc statements.
// Every grammar level computes its value while it parses; no tree is built.
//
// <bexpr>  ::= <expr> ;
// <expr>   ::= <term> <ttail>
// <ttail>  ::= (+ | -) <term> <ttail> | e
// <term>   ::= <stmt> <stail>
// <stail>  ::= (* | /) <stmt> <stail> | e
// <stmt>   ::= <factor> <ftail>
// <ftail>  ::= (< | > | <= | >= | != | ==) <factor> <ftail> | e
// <factor> ::= <expp> ^ <factor> | <expp>
// <expp>   ::= ( <expr> ) | <num>
// <num>    ::= {0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9}+
//
// Outside the comparisons, an operator or delimiter written with a trailing
// '=' is read as its first character: `1 += 2;` is `1 + 2;`.

pub mod config;
pub mod error;
mod ops;

use calc_lexer::{Lexer, Token, TokenType};
use log::{debug, trace};

use self::config::ParserConfig;
use self::error::{EvalError, EvalResult, Expected};
use self::ops::Comparison;

/// Evaluate the first statement of `line` with the default configuration
pub fn evaluate(line: &str) -> EvalResult<i64> {
    evaluate_with(line, ParserConfig::default())
}

/// Evaluate the first statement of `line`
pub fn evaluate_with(line: &str, config: ParserConfig) -> EvalResult<i64> {
    Parser::with_config(Lexer::new(line), config).bexpr()
}

/// Evaluator over one line of input.
///
/// The parser owns the lexer cursor and the current token. Grammar levels
/// leave `current` on the first token they did not consume, and only
/// [`Parser::advance`] replaces it.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    depth: usize,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default configuration
    pub fn new(line: &'a str) -> Self {
        Self::with_config(Lexer::new(line), ParserConfig::default())
    }

    /// Create a parser reading from `lexer`, primed with its next token
    pub fn with_config(mut lexer: Lexer<'a>, config: ParserConfig) -> Self {
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            depth: 0,
            config,
        }
    }

    /// The token the parser is looking at
    pub fn current(&self) -> &Token<'a> {
        &self.current
    }

    /// The text after the current token
    pub fn remaining(&self) -> &'a str {
        self.lexer.remaining()
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
        trace!("advance -> {} {:?}", self.current, self.current.lexeme);
    }

    fn expected(&self, expected: Expected) -> EvalError {
        debug!(
            "expected '{}' but found {:?} at {}",
            expected, self.current.lexeme, self.current.location
        );
        EvalError::Expected {
            expected,
            location: self.current.location,
        }
    }

    /// Run `parse` one nesting level deeper
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> EvalResult<T>) -> EvalResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(EvalError::NestingTooDeep {
                limit: self.config.max_depth,
                location: self.current.location,
            });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// <bexpr> -> <expr> ;
    ///
    /// Evaluates one statement. A `)` left over after the expression closes a
    /// group that was never opened and reports a missing `(`; anything else
    /// reports a missing `;`. On success the `;` is consumed, so the parser
    /// sits at the start of the next statement.
    pub fn bexpr(&mut self) -> EvalResult<i64> {
        debug!("=== bexpr === {:?}", self.lexer.source());
        let value = self.expr()?;

        match self.current.token_type.head() {
            TokenType::Semicolon => {
                self.advance();
                debug!("statement value {value}");
                Ok(value)
            }
            TokenType::RightParen => Err(self.expected(Expected::OpenParen)),
            _ => Err(self.expected(Expected::Semicolon)),
        }
    }

    /// <expr> -> <term> <ttail>
    pub fn expr(&mut self) -> EvalResult<i64> {
        let subtotal = self.term()?;
        self.ttail(subtotal)
    }

    /// <ttail> -> <add_sub_tok> <term> <ttail> | e
    fn ttail(&mut self, mut subtotal: i64) -> EvalResult<i64> {
        loop {
            let op = self.current;
            let apply = match op.token_type.head() {
                TokenType::Plus => ops::add,
                TokenType::Minus => ops::subtract,
                _ => return Ok(subtotal),
            };
            self.advance();
            let rhs = self.term()?;
            subtotal = apply(subtotal, rhs).map_err(|fault| fault.at(op.location))?;
        }
    }

    /// <term> -> <stmt> <stail>
    fn term(&mut self) -> EvalResult<i64> {
        let subtotal = self.stmt()?;
        self.stail(subtotal)
    }

    /// <stail> -> <mult_div_tok> <stmt> <stail> | e
    fn stail(&mut self, mut subtotal: i64) -> EvalResult<i64> {
        loop {
            let op = self.current;
            let apply = match op.token_type.head() {
                TokenType::Star => ops::multiply,
                TokenType::Slash => ops::divide,
                _ => return Ok(subtotal),
            };
            self.advance();
            let rhs = self.stmt()?;
            subtotal = apply(subtotal, rhs).map_err(|fault| fault.at(op.location))?;
        }
    }

    /// <stmt> -> <factor> <ftail>
    fn stmt(&mut self) -> EvalResult<i64> {
        let subtotal = self.factor()?;
        self.ftail(subtotal)
    }

    /// <ftail> -> <compare_tok> <factor> <ftail> | e
    ///
    /// Each comparison folds into the running value, so `3 < 5 < 1` compares
    /// the 0/1 result of `3 < 5` with 1.
    fn ftail(&mut self, mut subtotal: i64) -> EvalResult<i64> {
        while let Some(comparison) = Comparison::from_token(self.current.token_type) {
            self.advance();
            let rhs = self.factor()?;
            subtotal = comparison.apply(subtotal, rhs);
        }
        Ok(subtotal)
    }

    /// <factor> -> <expp> ^ <factor> | <expp>
    fn factor(&mut self) -> EvalResult<i64> {
        let base = self.expp()?;

        if !self.current.acts_as(TokenType::Caret) {
            return Ok(base);
        }
        let location = self.current.location;
        self.advance();
        let exponent = self.nested(Self::factor)?;
        ops::power(base, exponent).map_err(|fault| fault.at(location))
    }

    /// <expp> -> ( <expr> ) | <num>
    fn expp(&mut self) -> EvalResult<i64> {
        match self.current.token_type.head() {
            TokenType::LeftParen => self.nested(|parser| {
                parser.advance();
                let value = parser.expr()?;
                if !parser.current.acts_as(TokenType::RightParen) {
                    return Err(parser.expected(Expected::CloseParen));
                }
                parser.advance();
                Ok(value)
            }),
            // A closer with nothing open is left in place.
            TokenType::RightParen => Err(self.expected(Expected::OpenParen)),
            _ => self.num(),
        }
    }

    /// <num> -> {0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9}+
    fn num(&mut self) -> EvalResult<i64> {
        if !self.current.is(TokenType::IntLiteral) {
            return Err(self.expected(Expected::IntLiteral));
        }
        let value = self
            .current
            .lexeme
            .parse::<i64>()
            .map_err(|_| EvalError::Overflow {
                location: self.current.location,
            })?;
        self.advance();
        Ok(value)
    }
}
