use thiserror::Error;

/// Errors surfaced by ledger operations.
///
/// Every variant is raised before any balance is touched, so a failed call
/// leaves the ledger exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The amount is negative, not finite, or floors to zero base units
    /// where a positive amount is required.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The sender cannot cover the amount plus the fee.
    #[error("insufficient balance for {address}: available {available}, required {required}")]
    InsufficientBalance {
        /// The would-be sender.
        address: String,
        /// Sender balance in base units.
        available: u64,
        /// Amount plus fee in base units.
        required: u64,
    },

    /// Minting would push circulating balances past the supply ceiling.
    #[error("supply exceeded: requested {requested}, remaining {remaining}")]
    SupplyExceeded {
        /// Units requested by the mint.
        requested: u64,
        /// Units still mintable under the current ceiling.
        remaining: u64,
    },

    /// Addresses must be non-empty.
    #[error("address must not be empty")]
    EmptyAddress,

    /// A balance would exceed `u64::MAX`. Unreachable under the default
    /// supply, but custom params can get close.
    #[error("balance overflow for {0}")]
    Overflow(String),
}
