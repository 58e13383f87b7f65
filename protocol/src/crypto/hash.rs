//! # Hashing Utilities
//!
//! NEXAI has no source of randomness. Everything that would normally be
//! random (transaction ids, validator draws, coin ids, wallet addresses) is
//! a SHA-256 digest of a well-defined UTF-8 string, rendered as lowercase
//! hex. Two implementations fed the same strings must agree bit for bit, so
//! nothing here may depend on a language- or process-specific hasher.
//!
//! ## Hash stream
//!
//! [`HashStream`] turns one seed into an unbounded sequence of integers:
//! draw `i` is `sha256_hex(seed + decimal(i))` read as a big-endian unsigned
//! integer. The validator selector reduces each draw modulo total stake.

use sha2::{Digest, Sha256};

use crate::config::COIN_ID_HEX_LEN;

/// Compute the SHA-256 digest of `data`.
///
/// # Example
///
/// ```
/// use nexai_protocol::crypto::sha256;
///
/// let hash = sha256(b"NEXAI");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 of a UTF-8 string, as 64 lowercase hex characters.
///
/// This is the `derive` primitive every identifier in the ledger is built on.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(sha256(input.as_bytes()))
}

/// Reduce a 256-bit big-endian integer modulo `modulus`.
///
/// Equivalent to parsing the hex digest as an arbitrary-precision integer
/// and taking the remainder, without a bignum dependency: the running
/// remainder stays below `modulus`, so `r * 256 + byte` always fits in a
/// `u128`.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn reduce_be(digest: &[u8; 32], modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");
    let m = modulus as u128;
    let r = digest
        .iter()
        .fold(0u128, |acc, &byte| (acc * 256 + byte as u128) % m);
    r as u64
}

/// Deterministic coin id for `address` at `index`:
/// the first [`COIN_ID_HEX_LEN`] hex chars of `sha256_hex("{address}:{index}")`.
pub fn coin_id(address: &str, index: u64) -> String {
    let mut digest = sha256_hex(&format!("{address}:{index}"));
    digest.truncate(COIN_ID_HEX_LEN);
    digest
}

// ---------------------------------------------------------------------------
// HashStream
// ---------------------------------------------------------------------------

/// Sequence of pseudo-random draws derived from a seed string.
///
/// Draw `i` hashes `seed` with the decimal counter `i` appended (no
/// separator). The counter starts at zero and advances by one per draw.
#[derive(Clone, Debug)]
pub struct HashStream {
    seed: String,
    counter: u64,
}

impl HashStream {
    /// Starts a stream at counter zero.
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            counter: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> u64 {
        self.counter
    }

    /// Next raw digest.
    pub fn next_digest(&mut self) -> [u8; 32] {
        let digest = sha256(format!("{}{}", self.seed, self.counter).as_bytes());
        self.counter += 1;
        digest
    }

    /// Next draw reduced into `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        let digest = self.next_digest();
        reduce_be(&digest, bound)
    }
}
