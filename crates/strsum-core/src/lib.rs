// this_file: crates/strsum-core/src/lib.rs

//! Strsum Core: four stages from string to sum
//!
//! An input string enters as characters, exits as an integer total.
//! This crate holds the whole pipeline:
//!
//! 1. **Delimiter resolution** - A `//` prefix declares a custom
//!    delimiter; otherwise comma and newline separate.
//! 2. **Normalization** - Every recognized delimiter is rewritten to
//!    one canonical separator.
//! 3. **Tokenization** - The body splits into trimmed tokens; blanks
//!    drop out, the rest parse as base-10 integers.
//! 4. **Validation & reduction** - Negatives reject the call with a
//!    full report; values above the bound fall away; what remains sums.
//!
//! Every invocation is a pure, stateless transformation, so concurrent
//! callers need no coordination.
//!
//! ```
//! use strsum_core::add;
//!
//! assert_eq!(add("//;\n1;2").unwrap(), 3);
//!
//! let err = add("1,-2,3,-4").unwrap_err();
//! assert_eq!(err.to_string(), "negatives not allowed: -2, -4");
//! ```

pub mod delimiter;
pub mod error;
pub mod sum;
pub mod tokenize;

pub use delimiter::{DelimiterSpec, CANONICAL_SEPARATOR, CUSTOM_MARKER};
pub use error::{Result, SumError};
pub use sum::{add, UPPER_BOUND};

#[cfg(test)]
mod proptests;
