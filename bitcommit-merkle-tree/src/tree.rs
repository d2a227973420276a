use crate::{
    MerkleCommitmentError, Node, Result,
    hash::{Digest, TreeHasher, combine},
};

/// A binary Merkle tree over an ordered sequence of committed values.
///
/// Built once via [`build`](Self::build) and never mutated. The shape is
/// fully determined by the leaf count: the index range `[start, end]` is
/// split at `mid = (start + end) / 2`, left subtree over `[start, mid]`,
/// right over `[mid + 1, end]`. The leaf count must be a power of two so
/// every split is exact and the index-parity arithmetic used at proof and
/// verification time matches the shape at every level.
#[derive(Debug, Clone)]
pub struct MerkleCommitmentTree {
    root: Node,
    leaf_count: usize,
}

impl MerkleCommitmentTree {
    /// Build a tree over the given leaf sequence.
    ///
    /// Fails with [`MerkleCommitmentError::InvalidInput`] if the sequence
    /// is empty or its length is not a power of two. Use
    /// [`pad_to_power_of_two`] for arbitrary-length input.
    pub fn build<H, L>(hasher: &H, leaves: &[L]) -> Result<Self>
    where
        H: TreeHasher,
        L: AsRef<[u8]>,
    {
        if leaves.is_empty() {
            return Err(MerkleCommitmentError::InvalidInput(
                "leaf sequence is empty".to_string(),
            ));
        }
        if !leaves.len().is_power_of_two() {
            return Err(MerkleCommitmentError::InvalidInput(format!(
                "leaf count {} is not a power of two; pad the sequence first",
                leaves.len()
            )));
        }
        let root = Self::build_range(hasher, leaves, 0, leaves.len() - 1);
        Ok(Self {
            root,
            leaf_count: leaves.len(),
        })
    }

    /// Recursive midpoint split over the inclusive index range.
    fn build_range<H, L>(hasher: &H, leaves: &[L], start: usize, end: usize) -> Node
    where
        H: TreeHasher,
        L: AsRef<[u8]>,
    {
        if start == end {
            return Node::Leaf {
                hash: hasher.digest(leaves[start].as_ref()),
            };
        }
        let mid = (start + end) / 2;
        let left = Self::build_range(hasher, leaves, start, mid);
        let right = Self::build_range(hasher, leaves, mid + 1, end);
        let hash = combine(hasher, &left.hash(), &right.hash());
        Node::Internal {
            hash,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The root digest: a compact commitment to the whole leaf sequence.
    pub fn root_hash(&self) -> Digest {
        self.root.hash()
    }

    /// The root node of the owned node graph.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The number of leaves this tree was built from.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }
}

/// Pad a leaf sequence to the next power of two by repeating `fill`.
///
/// Returns an owned copy of the sequence; the input is unchanged. A
/// sequence whose length is already a power of two is copied as-is.
pub fn pad_to_power_of_two<L: AsRef<[u8]>>(leaves: &[L], fill: &[u8]) -> Vec<Vec<u8>> {
    let mut padded: Vec<Vec<u8>> = leaves.iter().map(|leaf| leaf.as_ref().to_vec()).collect();
    let target = padded.len().max(1).next_power_of_two();
    padded.resize(target, fill.to_vec());
    padded
}
