//! Proof verification for the commitment tree.
//!
//! Pure function — no tree access required. Recomputes the root digest from
//! the claimed leaf and its sibling path and compares it to the expected
//! root. A verifier running this never needs to have held the tree.

use crate::hash::{Digest, TreeHasher, combine};

/// Verify that `leaf_value` was committed at `index` in the tree that
/// produced `root`.
///
/// Folds the sibling path bottom-up: at each level, an even index means the
/// current digest is the left child (`digest(current || sibling)`), an odd
/// index means it is the right child (`digest(sibling || current)`); the
/// index then halves for the next level. This mirrors the left/right
/// decisions proof generation makes against the midpoint-split shape, which
/// is why leaf counts are restricted to powers of two at build time.
///
/// Malformed inputs never error: an out-of-range index, a wrong-length
/// path, or a corrupted digest all fail to reproduce the root and yield
/// `false`, observably identical to a tampered leaf. Callers learn only
/// that the proof does not establish membership.
pub fn verify_membership<H: TreeHasher>(
    hasher: &H,
    root: &Digest,
    leaf_value: &[u8],
    index: usize,
    leaf_count: usize,
    siblings: &[Digest],
) -> bool {
    if index >= leaf_count {
        return false;
    }

    let mut current = hasher.digest(leaf_value);
    let mut i = index;
    for sibling in siblings {
        current = if i % 2 == 0 {
            combine(hasher, &current, sibling)
        } else {
            combine(hasher, sibling, &current)
        };
        i /= 2;
    }

    current == *root
}
