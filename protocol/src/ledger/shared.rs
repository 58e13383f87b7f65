//! Lock-guarded ledger handle.
//!
//! The engine assumes one caller at a time. [`SharedLedger`] enforces that
//! for multi-threaded hosts: each method takes the mutex for exactly one
//! engine call, so a transfer's selection, balance updates, fee payout and
//! record append are never interleaved with another caller's.

use std::sync::Arc;

use parking_lot::Mutex;

use super::engine::Ledger;
use super::error::LedgerError;
use super::record::{LedgerRecord, TransferReceipt};

/// Cloneable, thread-safe handle to a single [`Ledger`].
#[derive(Clone, Debug, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    /// Wraps an existing ledger.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// See [`Ledger::mint`].
    pub fn mint(&self, address: &str, amount: f64) -> Result<(), LedgerError> {
        self.inner.lock().mint(address, amount)
    }

    /// See [`Ledger::mint_units`].
    pub fn mint_units(&self, address: &str, units: u64) -> Result<(), LedgerError> {
        self.inner.lock().mint_units(address, units)
    }

    /// See [`Ledger::transfer`].
    pub fn transfer(
        &self,
        sender: &str,
        recipient: &str,
        amount: f64,
    ) -> Result<TransferReceipt, LedgerError> {
        self.inner.lock().transfer(sender, recipient, amount)
    }

    /// See [`Ledger::transfer_units`].
    pub fn transfer_units(
        &self,
        sender: &str,
        recipient: &str,
        units: u64,
    ) -> Result<TransferReceipt, LedgerError> {
        self.inner.lock().transfer_units(sender, recipient, units)
    }

    /// See [`Ledger::balance_of`].
    pub fn balance_of(&self, address: &str) -> f64 {
        self.inner.lock().balance_of(address)
    }

    /// See [`Ledger::balance_units`].
    pub fn balance_units(&self, address: &str) -> u64 {
        self.inner.lock().balance_units(address)
    }

    /// Copy of the record history.
    pub fn records(&self) -> Vec<LedgerRecord> {
        self.inner.lock().records().to_vec()
    }

    /// Runs `f` against the ledger while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        f(&self.inner.lock())
    }
}
