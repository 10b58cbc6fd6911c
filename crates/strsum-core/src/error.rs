//! Error types for strsum

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SumError>;

/// Main error type for the summation engine.
///
/// Every variant is a caller contract violation; the engine never
/// recovers internally and never returns a partial sum alongside an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    /// One or more strictly negative values appeared in the input.
    ///
    /// Carries every offending value in original left-to-right order,
    /// duplicates preserved. The message enumerates them in canonical
    /// base-10 form, joined with `", "`.
    #[error("negatives not allowed: {}", join_values(.0))]
    NegativesNotAllowed(Vec<i64>),

    /// A non-blank token did not parse as a base-10 integer.
    #[error("invalid number token: {0:?}")]
    InvalidToken(String),

    /// A `//` custom-delimiter declaration was malformed.
    #[error("invalid delimiter declaration: {0}")]
    InvalidDelimiter(String),
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
