//! # Ledger Engine
//!
//! [`Ledger`] owns every balance, the record history, the supply ceiling and
//! the per-address coin nonces. All mutation goes through [`Ledger::mint`]
//! and [`Ledger::transfer`], which validate everything up front and only
//! then touch state, so a rejected call leaves the ledger untouched.
//!
//! ## Transfer
//!
//! ```text
//! units      = floor(amount * UNIT)                       (reject if 0)
//! require      balance(sender) >= units + fee
//! tx_id      = sha256_hex("{sender}->{recipient}:{units}:{len}:{sha256_hex(sender+recipient)}")
//! validators = select(tx_id, balances before the transfer, max_validators)
//! sender    -= units + fee
//! recipient += units
//! fee        -> validators by post-transfer stake, or burned if none
//! records   += LedgerRecord
//! ```
//!
//! `len` is the record count before the append, so two identical transfers
//! in a row still get distinct ids.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::amount::{format_units, to_display, to_units};
use super::balance::BalanceBook;
use super::error::LedgerError;
use super::fee::split_fee;
use super::record::{LedgerRecord, TransferReceipt};
use super::selector::select_validators;
use crate::config::{LedgerParams, TOKEN_NAME, TOKEN_TICKER};
use crate::crypto::{coin_id, sha256_hex};

/// In-memory token ledger.
///
/// Not `Sync`-safe for mutation by itself; wrap it in
/// [`SharedLedger`](super::SharedLedger) to hand it to several callers.
#[derive(Clone, Debug)]
pub struct Ledger {
    params: LedgerParams,
    balances: BalanceBook,
    records: Vec<LedgerRecord>,
    total_supply: u64,
    burned: u64,
    nonces: HashMap<String, u64>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates a ledger with the default [`LedgerParams`].
    pub fn new() -> Self {
        Self::with_params(LedgerParams::default())
    }

    /// Creates a ledger with explicit params.
    ///
    /// Callers must keep `fee_units > 0`, `total_supply_units > 0` and
    /// `fee_units <= total_supply_units`; [`LedgerParams::validate`] checks
    /// all of them. `max_validators == 0` is the one value accepted here but
    /// rejected by `validate`: it turns every fee into a burn.
    ///
    /// Debug builds assert these invariants.
    pub fn with_params(params: LedgerParams) -> Self {
        debug_assert!(
            params.validate().is_ok() || params.max_validators == 0,
            "invalid ledger params: {params:?}"
        );
        Self {
            total_supply: params.total_supply_units,
            params,
            balances: BalanceBook::new(),
            records: Vec::new(),
            burned: 0,
            nonces: HashMap::new(),
        }
    }

    /// Token name.
    pub fn name(&self) -> &'static str {
        TOKEN_NAME
    }

    /// Token ticker.
    pub fn ticker(&self) -> &'static str {
        TOKEN_TICKER
    }

    /// Params this ledger runs with.
    pub fn params(&self) -> &LedgerParams {
        &self.params
    }

    // -----------------------------------------------------------------------
    // Mint
    // -----------------------------------------------------------------------

    /// Mints `amount` display units to `address`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::EmptyAddress`] for an empty address.
    /// - [`LedgerError::InvalidAmount`] for negative or non-finite amounts.
    /// - [`LedgerError::SupplyExceeded`] if circulating balances would pass
    ///   the current supply ceiling.
    pub fn mint(&mut self, address: &str, amount: f64) -> Result<(), LedgerError> {
        let units = to_units(amount)?;
        self.mint_units(address, units)
    }

    /// Mints an exact number of base units.
    pub fn mint_units(&mut self, address: &str, units: u64) -> Result<(), LedgerError> {
        require_address(address)?;

        let remaining = self.mintable_units();
        if units > remaining {
            return Err(LedgerError::SupplyExceeded {
                requested: units,
                remaining,
            });
        }

        let balance = self.balances.credit(address, units)?;
        debug!(address, units, balance, "minted");
        Ok(())
    }

    /// Units that can still be minted under the current ceiling.
    pub fn mintable_units(&self) -> u64 {
        self.total_supply.saturating_sub(self.balances.circulating())
    }

    // -----------------------------------------------------------------------
    // Transfer
    // -----------------------------------------------------------------------

    /// Transfers `amount` display units from `sender` to `recipient`,
    /// charging the fixed fee on top.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::EmptyAddress`] if either address is empty.
    /// - [`LedgerError::InvalidAmount`] if the amount converts to zero units
    ///   or is negative / non-finite.
    /// - [`LedgerError::InsufficientBalance`] if the sender can't cover
    ///   amount plus fee.
    pub fn transfer(
        &mut self,
        sender: &str,
        recipient: &str,
        amount: f64,
    ) -> Result<TransferReceipt, LedgerError> {
        let units = to_units(amount)?;
        self.transfer_units(sender, recipient, units)
    }

    /// Transfers an exact number of base units.
    pub fn transfer_units(
        &mut self,
        sender: &str,
        recipient: &str,
        units: u64,
    ) -> Result<TransferReceipt, LedgerError> {
        require_address(sender)?;
        require_address(recipient)?;
        if units == 0 {
            return Err(LedgerError::InvalidAmount(
                "amount must be at least one base unit".to_string(),
            ));
        }

        let fee = self.params.fee_units;
        let available = self.balances.get(sender);
        let required = units
            .checked_add(fee)
            .ok_or_else(|| LedgerError::Overflow(sender.to_string()))?;
        if available < required {
            return Err(LedgerError::InsufficientBalance {
                address: sender.to_string(),
                available,
                required,
            });
        }

        let tx_id = self.derive_tx_id(sender, recipient, units);
        let validators = select_validators(&tx_id, &self.balances, self.params.max_validators);

        // Validation is complete. The debit shrinks circulating by
        // `required`, so none of the credits below can overflow.
        self.balances.debit(sender, required)?;
        self.balances.credit(recipient, units)?;
        let fee_shares = self.distribute_fee(&tx_id, &validators)?;

        self.records.push(LedgerRecord {
            tx_id: tx_id.clone(),
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            amount: units,
            fee,
            validators: validators.clone(),
        });

        info!(
            tx_id = %tx_id,
            sender,
            recipient,
            amount = %format_units(units),
            validators = validators.len(),
            "transfer committed"
        );

        Ok(TransferReceipt {
            tx_id,
            validators,
            fee_shares,
        })
    }

    /// Transaction id for a transfer at the current ledger height.
    fn derive_tx_id(&self, sender: &str, recipient: &str, units: u64) -> String {
        let pair_digest = sha256_hex(&format!("{sender}{recipient}"));
        let payload = format!(
            "{sender}->{recipient}:{units}:{}:{pair_digest}",
            self.records.len()
        );
        sha256_hex(&payload)
    }

    /// Pays the fee out to `validators` using their current balances, or
    /// burns it when there are none. Returns the share paid to each.
    fn distribute_fee(
        &mut self,
        tx_id: &str,
        validators: &[String],
    ) -> Result<Vec<u64>, LedgerError> {
        let fee = self.params.fee_units;

        if validators.is_empty() {
            // Circulating already dropped by `fee` in the sender debit.
            self.total_supply -= fee;
            self.burned += fee;
            warn!(tx_id, fee, "no validators available, fee burned");
            return Ok(Vec::new());
        }

        let stakes: Vec<u64> = validators.iter().map(|v| self.balances.get(v)).collect();
        let split = split_fee(fee, &stakes);
        for (validator, &share) in validators.iter().zip(&split.shares) {
            self.balances.credit(validator, share)?;
        }
        if split.dropped > 0 {
            warn!(
                tx_id,
                dropped = split.dropped,
                "validators hold no stake, even-split remainder dropped"
            );
        }
        Ok(split.shares)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Balance in display units. Unknown addresses are `0.0`.
    pub fn balance_of(&self, address: &str) -> f64 {
        to_display(self.balances.get(address))
    }

    /// Balance in base units. Unknown addresses are `0`.
    pub fn balance_units(&self, address: &str) -> u64 {
        self.balances.get(address)
    }

    /// Current supply ceiling in base units. Drops by the fee on every burn.
    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Sum of every balance, in base units.
    pub fn circulating_supply(&self) -> u64 {
        self.balances.circulating()
    }

    /// Total fees burned so far, in base units.
    pub fn burned(&self) -> u64 {
        self.burned
    }

    /// Positive-balance holders in selection order.
    pub fn holders(&self) -> Vec<(String, u64)> {
        self.balances
            .holders()
            .into_iter()
            .map(|(a, u)| (a.to_string(), u))
            .collect()
    }

    /// Read-only view of the balance book, e.g. for a selection dry run.
    pub fn balances(&self) -> &BalanceBook {
        &self.balances
    }

    /// Every record, oldest first.
    pub fn records(&self) -> &[LedgerRecord] {
        &self.records
    }

    /// The last `n` records, oldest first.
    pub fn recent_records(&self, n: usize) -> &[LedgerRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    /// Number of committed transfers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no transfer has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Full record history as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }

    // -----------------------------------------------------------------------
    // Coin ids
    // -----------------------------------------------------------------------

    /// Current coin nonce of `address` (starts at 0).
    pub fn nonce_of(&self, address: &str) -> u64 {
        self.nonces.get(address).copied().unwrap_or(0)
    }

    /// Advances the coin nonce of `address` by `by`, returning the new value.
    ///
    /// The engine never calls this itself; callers that want to "consume"
    /// generated coin ids do.
    pub fn advance_nonce(&mut self, address: &str, by: u64) -> u64 {
        let nonce = self.nonces.entry(address.to_string()).or_insert(0);
        *nonce = nonce.saturating_add(by);
        *nonce
    }

    /// `n` deterministic coin ids for `address`, starting at its nonce.
    /// Does not advance the nonce.
    pub fn generate_coin_ids(&self, address: &str, n: usize) -> Vec<String> {
        let start = self.nonce_of(address);
        (start..start.saturating_add(n as u64))
            .map(|i| coin_id(address, i))
            .collect()
    }
}

fn require_address(address: &str) -> Result<(), LedgerError> {
    if address.is_empty() {
        return Err(LedgerError::EmptyAddress);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
