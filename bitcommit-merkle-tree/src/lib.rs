//! Binary Merkle tree over an ordered sequence of bit commitments.
//!
//! The tree is built by a midpoint split over the leaf index range: a leaf
//! node hashes its value directly, and an internal node hashes the
//! concatenation of its children's digests in left-then-right order:
//!
//! `hash = digest(left_hash || right_hash)`
//!
//! A single-leaf membership proof is the list of sibling digests from the
//! leaf's own sibling up to the level just below the root. Verification
//! refolds that path and compares the result against a known root digest,
//! without ever touching the tree itself.
//!
//! The digest function is pluggable through [`TreeHasher`]; [`Blake3Hasher`]
//! is the default. Leaf counts must be a power of two so the index-parity
//! arithmetic used by proving and verifying always matches the tree shape
//! (see [`pad_to_power_of_two`] for arbitrary-length input).

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
mod node;
mod proof;
mod tree;
mod verify;


pub use error::{MerkleCommitmentError, Result};
pub use hash::{Blake3Hasher, Digest, Djb2Hasher, PrimeHasher, TreeHasher};
pub use node::Node;
pub use proof::CommitmentProof;
pub use tree::{MerkleCommitmentTree, pad_to_power_of_two};
pub use verify::verify_membership;
