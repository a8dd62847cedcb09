use crate::lexer::LexicalError;
use thiserror::Error;

/// Errors surfaced while evaluating a mask.
///
/// Masks are operator-supplied configuration and may be mistyped, so
/// everything here is recoverable at the [`crate::matches`] boundary.
/// Unbalanced closing parentheses are deliberately *not* an error: the
/// scanner treats stack exhaustion as the implicit outer boundary of the
/// expression.
#[derive(Debug, Error, PartialEq)]
pub enum MaskError {
    #[error("failed to lex predicate {expression:?} with {source:?}")]
    Lexical {
        expression: String,
        source: LexicalError,
    },
    #[error("malformed predicate {expression:?}: expected a field symbol, an operator and an unsigned literal")]
    MalformedPredicate { expression: String },
}

impl MaskError {
    pub(crate) fn lexical(expression: &str, source: LexicalError) -> Self {
        Self::Lexical {
            expression: expression.to_string(),
            source,
        }
    }

    pub(crate) fn malformed(expression: &str) -> Self {
        Self::MalformedPredicate {
            expression: expression.to_string(),
        }
    }
}
