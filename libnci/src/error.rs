// libnci/src/error.rs

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// A read or encode step needed more bytes than were available.
    #[error("invalid buffer length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Bytes the operation required.
        expected: usize,
        /// Bytes actually available.
        actual: usize,
    },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
