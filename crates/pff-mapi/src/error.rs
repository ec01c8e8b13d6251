//! Decode-level error type.

use thiserror::Error;

/// Errors raised while interpreting raw property value data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapiError {
    /// The value data does not have the serialized width of its type.
    #[error("invalid value data size: expected {expected} bytes, got {actual}")]
    UnsupportedValueSize { expected: usize, actual: usize },

    /// The value data is larger than the platform can address as a signed size.
    #[error("value data size {0} exceeds maximum")]
    ValueSizeExceedsMaximum(usize),

    /// No known encoding for the given Windows codepage number.
    #[error("unsupported codepage: {0}")]
    UnsupportedCodepage(u32),

    /// The byte stream contains sequences undefined in its codepage.
    #[error("invalid byte stream for codepage {0}")]
    InvalidByteStream(u32),

    #[error("invalid UTF-8 string data")]
    InvalidUtf8Data,

    #[error("invalid UTF-16 little-endian string data")]
    InvalidUtf16Data,

    #[error("invalid UTF-7 string data")]
    InvalidUtf7Data,

    /// The timestamp does not fit the supported datetime range.
    #[error("timestamp out of range")]
    TimestampOutOfRange,
}
