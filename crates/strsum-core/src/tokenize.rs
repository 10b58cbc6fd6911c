// this_file: crates/strsum-core/src/tokenize.rs

//! Tokenization and per-token parsing.

use crate::delimiter::CANONICAL_SEPARATOR;
use crate::error::{Result, SumError};

/// Split a normalized body on the canonical separator and parse every
/// surviving token as a base-10 integer.
///
/// Tokens that are empty after trimming are dropped silently, so
/// consecutive or trailing separators never error. A non-blank token
/// that fails to parse is fatal for the call
/// ([`SumError::InvalidToken`]); there is no skip-and-continue for
/// malformed tokens. Order of the parsed values follows the input.
pub fn tokenize(body: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for raw in body.split(CANONICAL_SEPARATOR) {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        let value: i64 = token
            .parse()
            .map_err(|_| SumError::InvalidToken(token.to_string()))?;
        values.push(value);
    }
    Ok(values)
}
