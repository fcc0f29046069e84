//! Errors reported by the decoding, validation and palette functions.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when converting or generating colors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input held no hex digits at all (an empty string or a lone `#`).
    #[error("no hex digits in input")]
    Empty,

    /// A character outside `0-9a-fA-F` was found.
    #[error("invalid hex digit {found:?} at offset {index}")]
    InvalidDigit {
        /// Byte offset of the offending character, not counting a leading `#`.
        index: usize,
        /// The offending character.
        found: char,
    },

    /// The number of digits does not match any layout the decoder accepts.
    #[error("expected {expected} hex digits, found {found}")]
    InvalidLength {
        /// Human readable list of accepted digit counts.
        expected: &'static str,
        /// Number of digits in the input.
        found: usize,
    },

    /// More digits than the decoder can fold without losing bits.
    #[error("{digits} hex digits exceed the {limit} digit limit")]
    TooManyDigits {
        /// Number of digits in the input.
        digits: usize,
        /// Most digits the decoder accepts.
        limit: usize,
    },

    /// A channel value does not fit in 8 bits.
    #[error("channel value {0} is outside 0..=255")]
    ChannelOutOfRange(i64),

    /// A palette was requested with no colors.
    #[error("a palette needs at least one color")]
    EmptyPalette,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::InvalidDigit {
            index: 2,
            found: 'x',
        };
        assert_eq!(err.to_string(), "invalid hex digit 'x' at offset 2");

        let err = Error::TooManyDigits {
            digits: 8,
            limit: 7,
        };
        assert_eq!(err.to_string(), "8 hex digits exceed the 7 digit limit");

        assert_eq!(
            Error::ChannelOutOfRange(-1).to_string(),
            "channel value -1 is outside 0..=255"
        );
    }
}
