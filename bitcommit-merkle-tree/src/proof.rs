//! Membership proof generation for the commitment tree.
//!
//! A [`CommitmentProof`] pairs one claimed leaf value with the sibling
//! digests needed to recompute the root from that leaf. Siblings are
//! ordered bottom-up: the leaf's own sibling first, the sibling just below
//! the root last. The verifier depends on that ordering.

use bincode::{Decode, Encode};

use crate::{
    MerkleCommitmentError, MerkleCommitmentTree, Node, Result,
    hash::{Digest, TreeHasher},
    verify::verify_membership,
};

/// Proof paths never exceed 64 levels (`2^64` leaves); longer decoded
/// paths are structurally invalid.
const MAX_PROOF_DEPTH: usize = 64;

/// A single-leaf membership proof.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct CommitmentProof {
    /// The claimed leaf value, as committed at build time.
    pub leaf_value: Vec<u8>,
    /// Sibling digests in bottom-up (leaf-to-root) order.
    pub siblings: Vec<Digest>,
}

impl MerkleCommitmentTree {
    /// Derive a membership proof for the leaf at `index`.
    ///
    /// `leaves` must be the identical sequence this tree was built from;
    /// it supplies the claimed leaf value, since the tree itself stores
    /// only digests. Fails with
    /// [`IndexOutOfRange`](MerkleCommitmentError::IndexOutOfRange) if
    /// `index >= leaf_count` and
    /// [`InvalidInput`](MerkleCommitmentError::InvalidInput) if the
    /// sequence length disagrees with the tree.
    pub fn prove_at<L: AsRef<[u8]>>(&self, leaves: &[L], index: usize) -> Result<CommitmentProof> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleCommitmentError::IndexOutOfRange { index, leaf_count });
        }
        if leaves.len() != leaf_count {
            return Err(MerkleCommitmentError::InvalidInput(format!(
                "leaf sequence has {} values but the tree was built from {}",
                leaves.len(),
                leaf_count
            )));
        }

        // Re-walk the midpoint split used at build time, recording the
        // off-path child digest at each level.
        let mut siblings: Vec<Digest> = Vec::new();
        let mut cursor = self.root();
        let (mut start, mut end) = (0usize, leaf_count - 1);
        while start < end {
            let Node::Internal { left, right, .. } = cursor else {
                return Err(MerkleCommitmentError::InvalidData(format!(
                    "node graph ends above the leaf level (range [{start}, {end}])"
                )));
            };
            let mid = (start + end) / 2;
            if index <= mid {
                siblings.push(right.hash());
                cursor = left;
                end = mid;
            } else {
                siblings.push(left.hash());
                cursor = right;
                start = mid + 1;
            }
        }

        // Recorded root-to-leaf during descent; the verifier consumes
        // bottom-up.
        siblings.reverse();

        Ok(CommitmentProof {
            leaf_value: leaves[index].as_ref().to_vec(),
            siblings,
        })
    }
}

impl CommitmentProof {
    /// Verify this proof against a known root digest.
    ///
    /// Convenience wrapper around [`verify_membership`]; see there for the
    /// recombination rules and the graceful-`false` error posture.
    pub fn verify<H: TreeHasher>(
        &self,
        hasher: &H,
        root: &Digest,
        index: usize,
        leaf_count: usize,
    ) -> bool {
        verify_membership(
            hasher,
            root,
            &self.leaf_value,
            index,
            leaf_count,
            &self.siblings,
        )
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| MerkleCommitmentError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects paths longer than 64 levels; no tree over a `usize` index
    /// space can produce one.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 16 * 1024 * 1024 }>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleCommitmentError::InvalidProof(format!("decode error: {}", e)))?;
        if proof.siblings.len() > MAX_PROOF_DEPTH {
            return Err(MerkleCommitmentError::InvalidProof(format!(
                "proof path has {} levels (max {})",
                proof.siblings.len(),
                MAX_PROOF_DEPTH
            )));
        }
        Ok(proof)
    }
}
