//! Error types for the `streamhash` crate

/// Errors that could occur while configuring a hasher or handling hash codes
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A [`crate::ChunkLayout`] was requested with a chunk size of zero.
    #[error("chunk size must be nonzero")]
    ZeroChunkSize,

    /// The buffer size of a [`crate::ChunkLayout`] is not a whole number of
    /// chunks.
    ///
    /// This is a programming error in the hash function being constructed;
    /// the streaming buffer can only flush whole chunks.
    #[error("buffer size {buffer_size} is not a multiple of chunk size {chunk_size}")]
    MisalignedBuffer {
        /// Requested chunk size, in bytes
        chunk_size: usize,
        /// Requested buffer size, in bytes
        buffer_size: usize,
    },

    /// A [`crate::HashCode`] can't be built from zero bytes.
    #[error("a hash code must contain at least one byte")]
    EmptyHashCode,

    /// A [`crate::HashCode`] can't hold more than [`crate::HashCode::MAX_SIZE`] bytes.
    #[error("hash code of {len} bytes exceeds the {max} byte maximum")]
    HashCodeTooLong {
        /// Number of bytes offered
        len: usize,
        /// Maximum supported size in bytes
        max: usize,
    },

    /// A fixed-width view was requested from a shorter [`crate::HashCode`].
    #[error("hash code has only {bits} bits, {wanted} bits were requested")]
    HashCodeTooShort {
        /// Width of the hash code
        bits: usize,
        /// Width of the requested view
        wanted: usize,
    },

    /// A hash code string was not valid hexadecimal.
    #[error("invalid hex in hash code: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
