use super::super::*;
use crate::token::TokenType;

fn types(input: &str) -> Vec<TokenType> {
    Lexer::new(input).map(|t| t.token_type).collect()
}

#[test]
fn test_lexer_basic() {
    let input = "1 + 22;";
    let lexer = Lexer::new(input);

    let tokens: Vec<Token> = lexer.collect();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].token_type, TokenType::IntLiteral);
    assert_eq!(tokens[0].lexeme, "1");
    assert_eq!(tokens[1].token_type, TokenType::Plus);
    assert_eq!(tokens[2].token_type, TokenType::IntLiteral);
    assert_eq!(tokens[2].lexeme, "22");
    assert_eq!(tokens[3].token_type, TokenType::Semicolon);
}

#[test]
fn test_lexer_single_character_operators() {
    assert_eq!(
        types("+ - * / ( ) ^ ; < > = !"),
        vec![
            TokenType::Plus,
            TokenType::Minus,
            TokenType::Star,
            TokenType::Slash,
            TokenType::LeftParen,
            TokenType::RightParen,
            TokenType::Caret,
            TokenType::Semicolon,
            TokenType::Less,
            TokenType::Greater,
            TokenType::Equal,
            TokenType::Bang,
        ]
    );
}

#[test]
fn test_lexer_relational_operators() {
    assert_eq!(
        types("<= >= == !="),
        vec![
            TokenType::LessEqual,
            TokenType::GreaterEqual,
            TokenType::EqualEqual,
            TokenType::NotEqual,
        ]
    );
    // The extension only looks one character ahead.
    assert_eq!(
        types("<=="),
        vec![TokenType::LessEqual, TokenType::Equal]
    );
    assert_eq!(types("< ="), vec![TokenType::Less, TokenType::Equal]);
}

#[test]
fn test_lexer_operator_never_joins_literal() {
    let tokens: Vec<Token> = Lexer::new("12-3").collect();
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme).collect();
    assert_eq!(lexemes, vec!["12", "-", "3"]);

    // Digits never take a trailing '='.
    assert_eq!(types("5="), vec![TokenType::IntLiteral, TokenType::Equal]);
}

#[test]
fn test_lexer_equal_extended_forms() {
    assert_eq!(
        types("+= -= *= /= ^= (= )= ;="),
        vec![
            TokenType::PlusEqual,
            TokenType::MinusEqual,
            TokenType::StarEqual,
            TokenType::SlashEqual,
            TokenType::CaretEqual,
            TokenType::LeftParenEqual,
            TokenType::RightParenEqual,
            TokenType::SemicolonEqual,
        ]
    );

    let tokens: Vec<Token> = Lexer::new("1+=2;").collect();
    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme).collect();
    assert_eq!(lexemes, vec!["1", "+=", "2", ";"]);
    assert!(tokens[1].acts_as(TokenType::Plus));

    assert_eq!(types("+ ="), vec![TokenType::Plus, TokenType::Equal]);
    assert_eq!(types("+=="), vec![TokenType::PlusEqual, TokenType::Equal]);
}

#[test]
fn test_lexer_runs() {
    let tokens: Vec<Token> = Lexer::new("abc12de 007").collect();
    let summary: Vec<(TokenType, &str)> =
        tokens.iter().map(|t| (t.token_type, t.lexeme)).collect();
    assert_eq!(
        summary,
        vec![
            (TokenType::Word, "abc"),
            (TokenType::IntLiteral, "12"),
            (TokenType::Word, "de"),
            (TokenType::IntLiteral, "007"),
        ]
    );
}

#[test]
fn test_lexer_skips_whitespace_and_line_endings() {
    assert_eq!(
        types("\t1 \r\n;\n"),
        vec![TokenType::IntLiteral, TokenType::Semicolon]
    );
}

#[test]
fn test_lexer_end_is_sticky() {
    let mut lexer = Lexer::new("7");
    assert_eq!(lexer.next_token().token_type, TokenType::IntLiteral);
    assert!(lexer.next_token().is_end());
    assert!(lexer.next_token().is_end());
    assert!(Lexer::new("").next_token().is_end());
    assert!(Lexer::new("   ").next_token().is_end());
}

#[test]
fn test_lexer_remaining_and_reset() {
    let mut lexer = Lexer::new("1 + 2;");
    assert_eq!(lexer.remaining(), "1 + 2;");

    lexer.next_token();
    assert_eq!(lexer.remaining(), " + 2;");
    lexer.next_token();
    assert_eq!(lexer.remaining(), " 2;");

    lexer.reset();
    assert_eq!(lexer.remaining(), "1 + 2;");
    let first = lexer.next_token();
    assert_eq!(first.lexeme, "1");
    assert_eq!(first.location.offset, 0);
}

#[test]
fn test_lexer_locations() {
    let tokens: Vec<Token> = Lexer::with_line("  10 *\t3;", 4).collect();

    assert_eq!(
        tokens[0].location,
        Location {
            line: 4,
            column: 3,
            offset: 2
        }
    );
    assert_eq!(tokens[1].location.column, 6);
    assert_eq!(tokens[2].location.column, 8);
    assert_eq!(tokens[3].location.offset, 8);
    assert!(tokens.iter().all(|t| t.location.line == 4));
}
