use crate::{
    error::MaskError,
    fields::{TimeField, TimeFields},
    lexer::Token,
};
use logos::Logos;
use std::fmt::{Display, Formatter};

/// The six relational operators of the mask language.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RelOp {
    Equal,
    NotEqual,
    GreaterThanEqual,
    LessThanEqual,
    GreaterThan,
    LessThan,
}

impl RelOp {
    fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Equal => Some(Self::Equal),
            Token::NotEqual => Some(Self::NotEqual),
            Token::GreaterThanEqual => Some(Self::GreaterThanEqual),
            Token::LessThanEqual => Some(Self::LessThanEqual),
            Token::GreaterThan => Some(Self::GreaterThan),
            Token::LessThan => Some(Self::LessThan),
            _ => None,
        }
    }

    #[inline]
    pub fn evaluate(&self, left: i64, right: i64) -> bool {
        match self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::GreaterThanEqual => left >= right,
            Self::LessThanEqual => left <= right,
            Self::GreaterThan => left > right,
            Self::LessThan => left < right,
        }
    }
}

impl Display for RelOp {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        let spelling = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::GreaterThanEqual => ">=",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
        };
        write!(formatter, "{spelling}")
    }
}

/// One atomic comparison of a timestamp field against an unsigned literal,
/// e.g. `Y >= 2019`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Predicate {
    field: TimeField,
    operator: RelOp,
    literal: u32,
}

impl Predicate {
    /// Parse a single atomic predicate.
    ///
    /// The input must contain exactly one field symbol, one relational
    /// operator and one unsigned integer literal, in that order; whitespace
    /// anywhere in between is tolerated. Anything else is a [`MaskError`]
    /// rather than a silently defaulted comparison.
    pub fn parse(expression: &str) -> Result<Self, MaskError> {
        let mut tokens = Token::lexer(expression);

        let field = match tokens.next() {
            Some(Ok(Token::Field(field))) => field,
            Some(Err(source)) => return Err(MaskError::lexical(expression, source)),
            _ => return Err(MaskError::malformed(expression)),
        };
        let operator = match tokens.next() {
            Some(Ok(token)) => RelOp::from_token(&token)
                .ok_or_else(|| MaskError::malformed(expression))?,
            Some(Err(source)) => return Err(MaskError::lexical(expression, source)),
            None => return Err(MaskError::malformed(expression)),
        };
        let literal = match tokens.next() {
            Some(Ok(Token::IntegerLiteral(literal))) => literal,
            Some(Err(source)) => return Err(MaskError::lexical(expression, source)),
            _ => return Err(MaskError::malformed(expression)),
        };
        match tokens.next() {
            None => Ok(Self {
                field,
                operator,
                literal,
            }),
            Some(Err(source)) => Err(MaskError::lexical(expression, source)),
            Some(Ok(_)) => Err(MaskError::malformed(expression)),
        }
    }

    #[inline]
    pub fn evaluate(&self, fields: &TimeFields) -> bool {
        self.operator
            .evaluate(fields.value(self.field), i64::from(self.literal))
    }
}

impl Display for Predicate {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "{}{}{}", self.field, self.operator, self.literal)
    }
}
