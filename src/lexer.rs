use crate::fields::TimeField;
use logos::Logos;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Default, Error, Debug, Clone, PartialEq)]
pub enum LexicalError {
    #[default]
    #[error("invalid token")]
    InvalidToken,
    #[error("failed to parse integer: {0:?}")]
    Integer(ParseIntError),
}

/// The tokens of a single atomic predicate such as `Y >= 2019`.
///
/// The scanner hands whole predicate slices to the lexer, so this token set
/// covers only field symbols, the six relational operators and unsigned
/// integer literals; the logical structure (`&`, `|`, parentheses) never
/// reaches it.
#[derive(Clone, Copy, Debug, Logos, PartialEq)]
#[logos(skip r"[\s\t\n\f]+", error = LexicalError)]
pub enum Token {
    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    #[token(">=")]
    GreaterThanEqual,
    #[token("<=")]
    LessThanEqual,
    #[token(">")]
    GreaterThan,
    #[token("<")]
    LessThan,
    #[regex("[YMDhmsW]", |lex| {
        lex.slice()
            .chars()
            .next()
            .and_then(TimeField::from_symbol)
            .ok_or(LexicalError::InvalidToken)
    })]
    Field(TimeField),
    #[regex("[0-9]+", |lex| lex.slice().parse::<u32>().map_err(LexicalError::Integer))]
    IntegerLiteral(u32),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_tokens(input: &str) -> Result<Vec<Token>, LexicalError> {
        Token::lexer(input).collect()
    }

    #[test]
    fn can_lex_equal() {
        let actual = lex_tokens("==").unwrap();
        assert_eq!(vec![Token::Equal], actual);
    }

    #[test]
    fn can_lex_not_equal() {
        let actual = lex_tokens("!=").unwrap();
        assert_eq!(vec![Token::NotEqual], actual);
    }

    #[test]
    fn can_lex_greater_than_equal() {
        let actual = lex_tokens(">=").unwrap();
        assert_eq!(vec![Token::GreaterThanEqual], actual);
    }

    #[test]
    fn can_lex_less_than_equal() {
        let actual = lex_tokens("<=").unwrap();
        assert_eq!(vec![Token::LessThanEqual], actual);
    }

    #[test]
    fn can_lex_greater_than() {
        let actual = lex_tokens(">").unwrap();
        assert_eq!(vec![Token::GreaterThan], actual);
    }

    #[test]
    fn can_lex_less_than() {
        let actual = lex_tokens("<").unwrap();
        assert_eq!(vec![Token::LessThan], actual);
    }

    #[test]
    fn can_lex_every_field_symbol() {
        let actual = lex_tokens("Y M D h m s W").unwrap();
        assert_eq!(
            vec![
                Token::Field(TimeField::Year),
                Token::Field(TimeField::Month),
                Token::Field(TimeField::Day),
                Token::Field(TimeField::Hour),
                Token::Field(TimeField::Minute),
                Token::Field(TimeField::Second),
                Token::Field(TimeField::Weekday),
            ],
            actual
        );
    }

    #[test]
    fn can_lex_integer() {
        let actual = lex_tokens("2019").unwrap();
        assert_eq!(vec![Token::IntegerLiteral(2019)], actual);
    }

    #[test]
    fn can_lex_a_full_predicate_with_interior_whitespace() {
        let actual = lex_tokens("Y \t>= 2019").unwrap();
        assert_eq!(
            vec![
                Token::Field(TimeField::Year),
                Token::GreaterThanEqual,
                Token::IntegerLiteral(2019),
            ],
            actual
        );
    }

    #[test]
    fn return_an_error_on_an_unknown_symbol() {
        let actual = lex_tokens("w==1");
        assert_eq!(Err(LexicalError::InvalidToken), actual);
    }

    #[test]
    fn return_an_error_on_a_negative_literal() {
        // Literals are unsigned; the minus sign is not part of the grammar.
        let actual = lex_tokens("-1");
        assert_eq!(Err(LexicalError::InvalidToken), actual);
    }

    #[test]
    fn return_an_error_on_an_overflowing_literal() {
        let actual = lex_tokens("99999999999999999999");
        assert!(matches!(actual, Err(LexicalError::Integer(_))));
    }
}
