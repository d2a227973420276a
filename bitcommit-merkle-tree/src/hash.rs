//! Pluggable digest functions for the commitment tree.
//!
//! The tree logic only requires a deterministic fixed-width digest that
//! accepts arbitrary byte strings, including two concatenated digests.
//! [`Blake3Hasher`] is the default; [`Djb2Hasher`] and [`PrimeHasher`] are
//! deliberately weak 64-bit toys kept for hiding analysis of the commitment
//! scheme and must never be used where collision resistance matters.

/// A fixed-width 32-byte digest.
pub type Digest = [u8; 32];

/// A deterministic digest function with fixed-width output.
///
/// Implementations must be pure: the same input always produces the same
/// digest, with no internal state carried between calls.
pub trait TreeHasher {
    /// Digest an arbitrary byte string.
    fn digest(&self, input: &[u8]) -> Digest;
}

/// Digest the concatenation `left || right`, in that order.
///
/// Child order matters: swapping the arguments changes the result.
pub(crate) fn combine<H: TreeHasher>(hasher: &H, left: &Digest, right: &Digest) -> Digest {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left);
    buf[32..].copy_from_slice(right);
    hasher.digest(&buf)
}

/// The default digest: Blake3.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl TreeHasher for Blake3Hasher {
    fn digest(&self, input: &[u8]) -> Digest {
        *blake3::hash(input).as_bytes()
    }
}

/// Widen a 64-bit toy hash into the fixed 32-byte digest width.
fn widen(hash: u64) -> Digest {
    let mut out = [0u8; 32];
    out[..8].copy_from_slice(&hash.to_be_bytes());
    out
}

/// Toy djb2-style hasher. 64 bits of state, not collision resistant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Djb2Hasher;

impl TreeHasher for Djb2Hasher {
    fn digest(&self, input: &[u8]) -> Digest {
        let mut hash: u64 = 5381;
        for &byte in input {
            hash = hash.rotate_left(5) ^ (byte as u64).wrapping_mul(0x5DEECE66D);
        }
        widen(hash)
    }
}

/// Toy multiplicative hasher. 64 bits of state, not collision resistant.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeHasher;

impl TreeHasher for PrimeHasher {
    fn digest(&self, input: &[u8]) -> Digest {
        let mut hash: u64 = 0;
        for &byte in input {
            hash = hash
                .rotate_left(5)
                .wrapping_add((byte as u64).wrapping_mul(131));
        }
        widen(hash)
    }
}
