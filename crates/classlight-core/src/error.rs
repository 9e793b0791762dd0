//! Error types for Classlight core.

use thiserror::Error;

/// Errors raised while parsing a color value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was empty (after stripping an optional `#`).
    #[error("Color value is empty")]
    Empty,

    /// More hex digits than fit into a 32-bit value.
    #[error("Color value '{value}' has {len} hex digits, max allowed is 8")]
    TooLong {
        /// The rejected input.
        value: String,
        /// Number of digits found.
        len: usize,
    },

    /// A character outside `0-9a-fA-F`.
    #[error("Color value '{0}' is not a hex number")]
    NotHex(String),
}
