use std::{collections::TryReserveError, result};
use thiserror::Error;

/// A type alias for `Result<T, fma_bench::Error>`.
pub type Result<T> = result::Result<T, Error>;

/// The error type for benchmark operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer memory could not be reserved
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Two buffers that must have the same length do not
    #[error("buffer length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Length of the reference buffer
        expected: usize,
        /// Length of the offending buffer
        actual: usize,
    },
}

impl Error {
    /// Creates a length-mismatch error from the two disagreeing lengths
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Error::LengthMismatch { expected, actual }
    }
}
