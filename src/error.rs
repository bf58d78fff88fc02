use thiserror::Error;

/// Errors returned by the maximum-subarray entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input slice has no elements. A maximum subarray is only defined
    /// over a non-empty sequence.
    #[error("empty input sequence")]
    EmptySequence,

    /// The `[low, high]` range passed to the divide-and-conquer variant does
    /// not describe a valid inclusive range within the input.
    #[error("invalid range [{low}, {high}] for sequence of length {len}")]
    InvalidRange {
        low: usize,
        high: usize,
        len: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
