//! Strsum - a delimiter-aware string summation engine
//!
//! Strsum sums the numbers encoded in a single string:
//!
//! 1. Delimiter resolution (`//;` or `//[***]` declarations)
//! 2. Normalization to one canonical separator
//! 3. Tokenization and base-10 parsing
//! 4. Validation and reduction
//!
//! # Example
//!
//! ```
//! use strsum::prelude::*;
//!
//! assert_eq!(add("1\n2,3").unwrap(), 6);
//! assert_eq!(add("//[***]\n1***2***3").unwrap(), 6);
//! ```
//!
//! Negative numbers reject the whole call with a report of every
//! offender; values above [`UPPER_BOUND`] are dropped without error.

pub use strsum_core::{
    add, error, DelimiterSpec, Result, SumError, CANONICAL_SEPARATOR, CUSTOM_MARKER, UPPER_BOUND,
};

/// Common imports for typical usage
pub mod prelude {
    pub use strsum_core::{
        add,
        error::{Result, SumError},
        UPPER_BOUND,
    };
}
