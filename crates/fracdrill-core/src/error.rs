//! Fraction error types.
//!
//! These errors come out of the value layer: building a [`Rational`] and
//! parsing answer text. The session converts every one of them into
//! user-facing feedback, so none of them ever reaches the user as a crash.
//!
//! [`Rational`]: crate::rational::Rational

use thiserror::Error;

/// Errors that can occur when constructing or parsing a fraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    /// A fraction was built with a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// The answer text is not a fraction, mixed number, or decimal.
    #[error("not a valid fraction: {0:?}")]
    Parse(String),
}

impl FractionError {
    /// Returns `true` if this error came from malformed user input.
    pub fn is_parse(&self) -> bool {
        matches!(self, FractionError::Parse(_))
    }
}
