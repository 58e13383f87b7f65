//! # Ledger Configuration & Constants
//!
//! Every magic number in NEXAI lives here. The engine reads its tunables
//! through [`LedgerParams`]; the constants below are the defaults those
//! params start from and the fixed values (decimals, id lengths) that are
//! not tunable at all.
//!
//! Changing `DECIMALS`, the hash-derived id lengths, or the selection attempt
//! factor changes transaction ids and validator picks for identical inputs.
//! Don't.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Token Identity
// ---------------------------------------------------------------------------

/// Token name, as shown in summaries.
pub const TOKEN_NAME: &str = "NEXAI";

/// Token ticker, appended to display amounts.
pub const TOKEN_TICKER: &str = "NXI";

/// Network tag written into wallet files.
pub const NETWORK_TAG: &str = "NEXAI-NXI";

/// Crate version, surfaced by the CLI `version` command.
pub const PROTOCOL_VERSION: &str = "0.1.0";

// ---------------------------------------------------------------------------
// Units
// ---------------------------------------------------------------------------

/// Display decimals. 1 NXI = 10^8 base units.
pub const DECIMALS: u32 = 8;

/// Base units per display unit.
pub const UNIT: u64 = 10u64.pow(DECIMALS);

/// Initial total supply in base units: 10 billion NXI.
///
/// 10^18 fits comfortably in a `u64` (max ~1.8 * 10^19), so balances never
/// need a wider type. Fee-share products do, and use `u128`.
pub const TOTAL_SUPPLY_UNITS: u64 = 10_000_000_000 * UNIT;

/// Fixed fee charged on every transfer, in base units (0.00001 NXI).
pub const FEE_UNITS: u64 = 1_000;

// ---------------------------------------------------------------------------
// Validator Selection
// ---------------------------------------------------------------------------

/// How many validators share each transfer's fee.
pub const MAX_VALIDATORS: usize = 5;

/// Selection gives up after `SELECTION_ATTEMPT_FACTOR * k` draws.
pub const SELECTION_ATTEMPT_FACTOR: usize = 20;

// ---------------------------------------------------------------------------
// Derived Identifiers
// ---------------------------------------------------------------------------

/// Hex characters kept from a SHA-256 digest for a coin id.
pub const COIN_ID_HEX_LEN: usize = 16;

/// Hex characters kept from `sha256(seed)` for a wallet address.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Hex characters of the address used in a wallet file name.
pub const WALLET_FILE_PREFIX_LEN: usize = 10;

// ---------------------------------------------------------------------------
// LedgerParams
// ---------------------------------------------------------------------------

/// Errors raised while loading or validating [`LedgerParams`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`LedgerParams`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the engine cannot run with.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Offending field name.
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// Tunable engine parameters.
///
/// Every field is optional in TOML; missing fields fall back to the
/// constants above.
///
/// ```toml
/// total_supply_units = 1000000000000000000
/// fee_units = 1000
/// max_validators = 5
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerParams {
    /// Initial supply ceiling, in base units.
    pub total_supply_units: u64,
    /// Fee per transfer, in base units.
    pub fee_units: u64,
    /// Upper bound on validators per transfer.
    pub max_validators: usize,
}

impl Default for LedgerParams {
    fn default() -> Self {
        Self {
            total_supply_units: TOTAL_SUPPLY_UNITS,
            fee_units: FEE_UNITS,
            max_validators: MAX_VALIDATORS,
        }
    }
}

impl LedgerParams {
    /// Parses params from a TOML document and validates them.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let params: Self = toml::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    /// Reads and parses a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Rejects parameter sets the engine cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_supply_units == 0 {
            return Err(ConfigError::InvalidValue {
                field: "total_supply_units",
                reason: "must be positive",
            });
        }
        if self.fee_units == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fee_units",
                reason: "must be positive",
            });
        }
        if self.fee_units > self.total_supply_units {
            return Err(ConfigError::InvalidValue {
                field: "fee_units",
                reason: "must not exceed total supply",
            });
        }
        if self.max_validators == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_validators",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
