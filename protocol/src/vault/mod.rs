//! # Vault Module — Wallet Files
//!
//! Wallet files sit outside the ledger. They hold a seed, the address
//! derived from it, and a recorded balance, and are read and written as
//! JSON. Nothing here reads or mutates ledger state.

pub mod wallet;

pub use wallet::{address_from_seed, WalletError, WalletFile};
