// this_file: crates/strsum-core/src/delimiter.rs

//! Delimiter resolution and input normalization.
//!
//! The first stage of the summation pipeline. A raw input either opens
//! with a `//` custom-delimiter declaration or falls back to the
//! default separators (comma and newline). Whatever the declared
//! delimiter is, the body is rewritten so that a single canonical
//! separator remains for the tokenizer to split on.

use crate::error::{Result, SumError};

/// The single separator every recognized delimiter is rewritten to.
pub const CANONICAL_SEPARATOR: char = ',';

/// Prefix that opens a custom-delimiter declaration.
pub const CUSTOM_MARKER: &str = "//";

/// Which separators apply to one invocation.
///
/// A custom delimiter is always a literal substring, never a pattern.
/// Only one declaration is honored per call; there is no chained
/// multi-delimiter syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterSpec {
    /// Comma plus newline, when no `//` declaration is present.
    Default,
    /// A declared single-character or bracketed multi-character literal.
    Custom(String),
}

impl DelimiterSpec {
    /// Split raw input into its delimiter spec and the numbers body.
    ///
    /// `//<c>\n<body>` declares the single character `<c>`;
    /// `//[<text>]\n<body>` declares the literal `<text>` and wins
    /// whenever the character after the marker is `[`. Malformed
    /// declarations (no delimiter character, unterminated or empty
    /// brackets, missing terminating newline) fail with
    /// [`SumError::InvalidDelimiter`].
    pub fn resolve(input: &str) -> Result<(Self, &str)> {
        let Some(decl) = input.strip_prefix(CUSTOM_MARKER) else {
            return Ok((Self::Default, input));
        };

        if let Some(bracketed) = decl.strip_prefix('[') {
            let close = bracketed.find(']').ok_or_else(|| {
                SumError::InvalidDelimiter("unterminated '[' in declaration".into())
            })?;
            let delimiter = &bracketed[..close];
            if delimiter.is_empty() {
                return Err(SumError::InvalidDelimiter(
                    "empty delimiter in brackets".into(),
                ));
            }
            let body = bracketed[close + 1..].strip_prefix('\n').ok_or_else(|| {
                SumError::InvalidDelimiter("declaration not terminated by newline".into())
            })?;
            return Ok((Self::Custom(delimiter.to_string()), body));
        }

        let mut chars = decl.chars();
        let delimiter = chars.next().ok_or_else(|| {
            SumError::InvalidDelimiter("missing delimiter character".into())
        })?;
        let body = chars.as_str().strip_prefix('\n').ok_or_else(|| {
            SumError::InvalidDelimiter("declaration not terminated by newline".into())
        })?;
        Ok((Self::Custom(delimiter.to_string()), body))
    }

    /// Rewrite every occurrence of the declared delimiter in `body` to
    /// the canonical separator.
    ///
    /// Under [`DelimiterSpec::Default`] newlines become commas. Under
    /// [`DelimiterSpec::Custom`] only the declared literal is rewritten;
    /// a comma in the body still separates, a raw newline does not.
    pub fn normalize(&self, body: &str) -> String {
        match self {
            Self::Default => body.replace('\n', ","),
            Self::Custom(delimiter) => body.replace(delimiter.as_str(), ","),
        }
    }
}
