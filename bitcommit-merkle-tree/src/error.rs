use thiserror::Error;

/// Alias for `core::result::Result<T, MerkleCommitmentError>`.
pub type Result<T> = core::result::Result<T, MerkleCommitmentError>;

/// Errors from Merkle commitment tree operations.
///
/// A failed verification is NOT an error:
/// [`verify_membership`](crate::verify_membership) returns `false` for any
/// proof that does not reproduce the root, malformed or tampered alike.
#[derive(Debug, Error)]
pub enum MerkleCommitmentError {
    /// The leaf sequence is unusable: empty, not a power of two, or does
    /// not match the tree it is paired with.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A proof was requested for an index outside `[0, leaf_count)`.
    #[error("index {index} is out of range (leaf count {leaf_count})")]
    IndexOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// The number of leaves the tree was built from.
        leaf_count: usize,
    },
    /// The node graph disagrees with the recorded leaf count.
    #[error("invalid tree data: {0}")]
    InvalidData(String),
    /// A serialized proof failed to decode or violated structural limits.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
