//! Error types returned by the codecs and generators.

use thiserror::Error;

/// Error parsing an invalid text or binary representation of UUID.
///
/// Each variant points at the first problem found; the checks run in the order the variants are
/// declared (length, then separators, then hexadecimal digits).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum ParseError {
    /// The input does not have the length of the representation (36 bytes of text or 16 bytes of
    /// binary).
    #[error("invalid length: expected {expected} bytes, found {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// One of the hyphens at positions 8, 13, 18 and 23 is missing.
    #[error("invalid separator at position {position}")]
    InvalidSeparator { position: usize },

    /// A hyphen-delimited group contains something other than hexadecimal digits.
    #[error("invalid hexadecimal digit at position {position}")]
    InvalidHex { position: usize },
}

impl ParseError {
    /// Returns true if the input was rejected for its length.
    pub fn is_length_error(&self) -> bool {
        matches!(self, ParseError::InvalidLength { .. })
    }

    /// Returns true if the input was rejected for a misplaced or missing hyphen.
    pub fn is_separator_error(&self) -> bool {
        matches!(self, ParseError::InvalidSeparator { .. })
    }

    /// Returns true if the input was rejected for a non-hexadecimal digit.
    pub fn is_hex_error(&self) -> bool {
        matches!(self, ParseError::InvalidHex { .. })
    }
}

/// Error reading random bytes from an [`EntropySource`](crate::EntropySource).
#[derive(Debug, Error)]
#[error("entropy source failed to supply random bytes")]
pub struct EntropyError {
    #[source]
    source: rand::Error,
}

impl EntropyError {
    /// Returns the underlying error reported by the random number generator.
    pub fn inner(&self) -> &rand::Error {
        &self.source
    }
}

impl From<rand::Error> for EntropyError {
    fn from(source: rand::Error) -> Self {
        Self { source }
    }
}

/// Any error this crate produces.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
