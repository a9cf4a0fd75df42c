use thiserror::Error;

/// Result alias for fallible `ZString` and `ZSlice` operations.
pub type Result<T> = std::result::Result<T, ZStringError>;

/// Error types for `ZString` and `ZSlice` operations
///
/// Every error is detected before any mutation takes place, so a failed
/// call leaves the buffer's length, capacity, and terminator untouched.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ZStringError {
    /// Requested sub-range exceeds the current content length
    #[error("range starting at {start} with length {len} is out of bounds for content of length {length}")]
    RangeOutOfBounds {
        /// First cell of the requested range
        start: usize,
        /// Number of cells requested
        len: usize,
        /// Content length of the buffer
        length: usize,
    },
    /// Replacement content differs in length from the window it targets
    #[error("length mismatch: replacement is {replacement} bytes, window is {expected} bytes")]
    LengthMismatch {
        /// Length of the window being replaced
        expected: usize,
        /// Length of the replacement content
        replacement: usize,
    },
    /// Index is at or beyond the current content length
    #[error("index {index} is out of bounds for content of length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Content length at the time of access
        length: usize,
    },
}
