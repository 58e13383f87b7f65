//! # Deterministic Hashing for NEXAI
//!
//! The only cryptography the ledger needs: SHA-256, exposed as hex strings
//! and as a seeded stream of integers. There are no keys and no signatures;
//! determinism is the whole point.

pub mod hash;

pub use hash::{coin_id, reduce_be, sha256, sha256_hex, HashStream};
