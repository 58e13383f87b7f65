use serde::{Deserialize, Serialize};

/// Immutable audit entry for one completed transfer.
///
/// Appended by [`Ledger::transfer`](super::Ledger::transfer) and never
/// touched again. Amounts are base units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// SHA-256 hex transaction id.
    pub tx_id: String,
    /// Debited address.
    pub sender: String,
    /// Credited address.
    pub recipient: String,
    /// Units moved from sender to recipient.
    pub amount: u64,
    /// Fee charged on top of `amount`.
    pub fee: u64,
    /// Validators that shared the fee, in selection order. Empty means the
    /// fee was burned.
    pub validators: Vec<String>,
}

impl LedgerRecord {
    /// Returns `true` if nobody was paid the fee.
    pub fn fee_burned(&self) -> bool {
        self.validators.is_empty()
    }
}

/// What a successful transfer hands back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Transaction id, identical to the appended record's.
    pub tx_id: String,
    /// Selected validators, in selection order.
    pub validators: Vec<String>,
    /// Fee share credited to each validator, aligned with `validators`.
    pub fee_shares: Vec<u64>,
}

impl TransferReceipt {
    /// Total fee units actually paid to validators.
    pub fn fee_paid(&self) -> u64 {
        self.fee_shares.iter().sum()
    }
}
