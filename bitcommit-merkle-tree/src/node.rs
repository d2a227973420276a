//! The owned node graph of a built tree.

use crate::hash::Digest;

/// A node in the commitment tree.
///
/// Each internal node exclusively owns its two children; the graph is a
/// pure binary tree with a single root and `2n - 1` nodes for `n` leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf: `hash = digest(leaf_value)`.
    Leaf {
        /// Digest of the committed leaf value.
        hash: Digest,
    },
    /// An internal node: `hash = digest(left.hash || right.hash)`.
    Internal {
        /// Digest of the concatenated child digests, left then right.
        hash: Digest,
        /// Left subtree, covering the lower half of the index range.
        left: Box<Node>,
        /// Right subtree, covering the upper half of the index range.
        right: Box<Node>,
    },
}

impl Node {
    /// The 32-byte digest identifying this node.
    pub fn hash(&self) -> Digest {
        match self {
            Node::Leaf { hash } | Node::Internal { hash, .. } => *hash,
        }
    }
}
