//! Error types for the `seqkit` crate

/// Errors from positional list operations
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An index was outside the list.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the list
        len: usize,
    },

    /// A `from..to` range was reversed or extended past the end of the list.
    #[error("invalid range {from}..{to} for length {len}")]
    InvalidRange {
        /// Inclusive start of the range
        from: usize,
        /// Exclusive end of the range
        to: usize,
        /// Length of the list
        len: usize,
    },
}
