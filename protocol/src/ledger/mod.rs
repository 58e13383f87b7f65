//! # Ledger Module — Balances, Transfers & Validator Fees
//!
//! The ledger is where every NXI lives. It keeps integer base-unit balances
//! in memory, moves value between addresses for a fixed fee, and pays that
//! fee to a handful of stakeholders picked by a deterministic, stake-weighted
//! draw.
//!
//! ## Architecture
//!
//! ```text
//! amount.rs    — display amount <-> base unit conversion
//! balance.rs   — insertion-ordered balance book with implicit zero
//! selector.rs  — stake-weighted validator draw over a balance snapshot
//! fee.rs       — proportional fee split with exact remainder handling
//! record.rs    — immutable transfer records and receipts
//! engine.rs    — the Ledger itself: mint, transfer, queries, coin ids
//! shared.rs    — mutex-guarded handle for multi-caller hosts
//! ```
//!
//! ## Design Principles
//!
//! 1. **Integers only past the boundary.** Floats are accepted as a
//!    convenience and converted once, truncating.
//! 2. **Validate, then mutate.** Every error is raised before any balance
//!    changes.
//! 3. **No hidden randomness.** Same state plus same call gives the same
//!    transaction id and the same validators, on any machine.

pub mod amount;
pub mod balance;
pub mod engine;
pub mod error;
pub mod fee;
pub mod record;
pub mod selector;
pub mod shared;

pub use amount::{format_units, format_with_ticker, to_display, to_units};
pub use balance::BalanceBook;
pub use engine::Ledger;
pub use error::LedgerError;
pub use fee::{split_fee, FeeSplit};
pub use record::{LedgerRecord, TransferReceipt};
pub use selector::select_validators;
pub use shared::SharedLedger;
