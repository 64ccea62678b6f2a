//! Error types for Horizon Bind core.

/// Errors raised by [`ObservableList`](crate::ObservableList) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// An index was outside the live range of the collection.
    #[error("index {index} out of range for collection of length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Collection length at the time of the call.
        len: usize,
    },
}

impl CollectionError {
    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        crate::bind_debug!(index, len, "collection index out of range");
        Self::OutOfRange { index, len }
    }
}

/// A specialized Result type for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
