//! Error types for packed array construction and access.

use thiserror::Error;

/// Why a word buffer and element count do not describe a valid packed array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("storage buffer is empty")]
    EmptyStorage,

    #[error("stored element count must be > 0")]
    ZeroStoredCount,

    /// The width implied by `words * 64 / stored_count` is 0 or wider than a word.
    #[error("{words} words cannot hold {stored_count} elements (derived width {element_bits} bits)")]
    ElementBitsOutOfRange {
        element_bits: usize,
        words: usize,
        stored_count: usize,
    },

    #[error("invalid packed-int array provided, should be of length {expected} (got {actual}, {element_bits} bits per element)")]
    WordCountMismatch {
        expected: usize,
        actual: usize,
        element_bits: u8,
    },

    #[error("byte buffer length {len} is not a multiple of 8")]
    ByteLength { len: usize },
}

/// Errors returned by [`PackedIntArrayReader`](crate::PackedIntArrayReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackedArrayError {
    #[error("invalid packed array configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}

impl PackedArrayError {
    /// True for errors raised while building a reader.
    pub fn is_configuration(&self) -> bool {
        matches!(self, PackedArrayError::Configuration(_))
    }
}
