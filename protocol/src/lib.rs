// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # NEXAI Ledger — Core Library
//!
//! A single-process token ledger for NXI. Balances are integer base units
//! (10^-8 NXI), every transfer pays a fixed fee, and that fee goes to a few
//! stakeholders chosen by a stake-weighted draw seeded from the transaction
//! id. No signatures, no networking, no disk: just the books.
//!
//! ## Architecture
//!
//! - **config** — Constants and tunable [`LedgerParams`](config::LedgerParams).
//! - **crypto** — SHA-256 hex digests and the deterministic hash stream.
//! - **ledger** — The engine: mint, transfer, validator selection, fees.
//! - **vault** — Wallet files on disk, independent of ledger state.
//!
//! ## Example
//!
//! ```
//! use nexai_protocol::ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.mint("nexai:genesis", 1_000.0).unwrap();
//! let receipt = ledger.transfer("nexai:genesis", "wallet:alice", 12.5).unwrap();
//!
//! assert_eq!(ledger.balance_of("wallet:alice"), 12.5);
//! assert_eq!(receipt.validators, vec!["nexai:genesis".to_string()]);
//! ```

pub mod config;
pub mod crypto;
pub mod ledger;
pub mod vault;
