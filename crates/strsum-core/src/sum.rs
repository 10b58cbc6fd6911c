// this_file: crates/strsum-core/src/sum.rs

//! The engine that drives an input string through four stages to a sum.

use crate::delimiter::DelimiterSpec;
use crate::error::{Result, SumError};
use crate::tokenize::tokenize;

/// Inclusive upper bound; values strictly above it are excluded from
/// the sum without error.
pub const UPPER_BOUND: i64 = 1000;

/// Sum the numbers encoded in `input`.
///
/// Resolve delimiters → normalize → tokenize → validate → reduce, all
/// in one synchronous pass. Empty input short-circuits to `0` before
/// any delimiter resolution. Strictly negative values fail the whole
/// call with [`SumError::NegativesNotAllowed`]; values above
/// [`UPPER_BOUND`] are dropped silently.
///
/// ```
/// use strsum_core::add;
///
/// assert_eq!(add("1\n2,3").unwrap(), 6);
/// assert_eq!(add("//[***]\n1***2***3").unwrap(), 6);
/// assert_eq!(add("2,1001").unwrap(), 2);
/// ```
pub fn add(input: &str) -> Result<i64> {
    if input.is_empty() {
        return Ok(0);
    }

    let (spec, body) = DelimiterSpec::resolve(input)?;
    log::debug!("Resolved delimiter spec: {:?}", spec);

    let normalized = spec.normalize(body);
    let values = tokenize(&normalized)?;
    log::trace!("Parsed {} values", values.len());

    // Negatives are checked against the full parsed set, before the
    // bound filter gets a chance to drop anything.
    check_negatives(&values)?;

    Ok(values.into_iter().filter(|v| *v <= UPPER_BOUND).sum())
}

fn check_negatives(values: &[i64]) -> Result<()> {
    let negatives: Vec<i64> = values.iter().copied().filter(|v| *v < 0).collect();
    if negatives.is_empty() {
        Ok(())
    } else {
        Err(SumError::NegativesNotAllowed(negatives))
    }
}
