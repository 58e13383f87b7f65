//! # Wallet Files
//!
//! A wallet file is a small pretty-printed JSON document:
//!
//! ```json
//! {
//!   "address": "3f1c...",
//!   "seed": "9ab0...",
//!   "balance_units": 0,
//!   "decimals": 8,
//!   "network": "NEXAI-NXI"
//! }
//! ```
//!
//! The address is the first 40 hex characters of `sha256_hex(seed)`. The
//! seed is 32 random bytes, hex-encoded, and is the only secret in the
//! file. Wallet files never touch a [`Ledger`](crate::ledger::Ledger):
//! `balance_units` is whatever the creator wrote, not a live query.

use std::fs;
use std::path::{Path, PathBuf};

use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::{ADDRESS_HEX_LEN, DECIMALS, NETWORK_TAG, TOKEN_TICKER, WALLET_FILE_PREFIX_LEN};
use crate::crypto::sha256_hex;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while reading or writing wallet files.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Filesystem failure.
    #[error("wallet file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid wallet document.
    #[error("malformed wallet file: {0}")]
    Json(#[from] serde_json::Error),

    /// A wallet with this address already exists at the target path.
    #[error("wallet file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// `decimals` is too large to scale a `u64` balance.
    #[error("unsupported decimals: {0}")]
    UnsupportedDecimals(u32),
}

// ---------------------------------------------------------------------------
// WalletFile
// ---------------------------------------------------------------------------

/// On-disk wallet document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletFile {
    /// Hex address derived from `seed`.
    pub address: String,
    /// Hex-encoded random seed. Keep it secret.
    pub seed: String,
    /// Balance recorded in the file, in base units.
    pub balance_units: u64,
    /// Display decimals for `balance_units`.
    pub decimals: u32,
    /// Network tag.
    pub network: String,
}

/// Wallet address for a seed: the first 40 hex chars of its SHA-256.
pub fn address_from_seed(seed: &str) -> String {
    let mut digest = sha256_hex(seed);
    digest.truncate(ADDRESS_HEX_LEN);
    digest
}

impl WalletFile {
    /// Builds a wallet document for an existing seed, with a zero balance.
    pub fn from_seed(seed: impl Into<String>) -> Self {
        let seed = seed.into();
        Self {
            address: address_from_seed(&seed),
            seed,
            balance_units: 0,
            decimals: DECIMALS,
            network: NETWORK_TAG.to_string(),
        }
    }

    /// Generates a fresh wallet from 32 bytes of OS-seeded randomness.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self::from_seed(hex::encode(bytes))
    }

    /// `wallet_<first 10 address chars>.json`.
    pub fn default_file_name(&self) -> String {
        let prefix: String = self.address.chars().take(WALLET_FILE_PREFIX_LEN).collect();
        format!("wallet_{prefix}.json")
    }

    /// Writes the wallet into `dir` under [`default_file_name`](Self::default_file_name).
    ///
    /// Refuses to overwrite an existing file: losing a seed loses the wallet.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf, WalletError> {
        let path = dir.as_ref().join(self.default_file_name());
        if path.exists() {
            return Err(WalletError::AlreadyExists(path));
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }

        info!(address = %self.address, path = %path.display(), "wallet file written");
        Ok(path)
    }

    /// Reads a wallet file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let raw = fs::read_to_string(path)?;
        let wallet: Self = serde_json::from_str(&raw)?;
        Ok(wallet)
    }

    /// Balance as an exact decimal string using the file's own `decimals`.
    pub fn display_balance(&self) -> Result<String, WalletError> {
        let scale = 10u64
            .checked_pow(self.decimals)
            .ok_or(WalletError::UnsupportedDecimals(self.decimals))?;
        let whole = self.balance_units / scale;
        if self.decimals == 0 {
            return Ok(whole.to_string());
        }
        let frac = self.balance_units % scale;
        Ok(format!(
            "{}.{:0>width$}",
            whole,
            frac,
            width = self.decimals as usize
        ))
    }

    /// Human-readable multi-line summary, seed included.
    pub fn summary(&self) -> Result<String, WalletError> {
        Ok(format!(
            "=== Wallet ===\n\
             Network : {}\n\
             Address : {}\n\
             Seed    : {}\n\
             Balance : {} {}",
            self.network,
            self.address,
            self.seed,
            self.display_balance()?,
            TOKEN_TICKER
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEED: &str = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";

    #[test]
    fn address_is_truncated_seed_digest() {
        let address = address_from_seed(TEST_SEED);
        assert_eq!(address.len(), ADDRESS_HEX_LEN);
        assert!(sha256_hex(TEST_SEED).starts_with(&address));
    }

    #[test]
    fn from_seed_defaults() {
        let w = WalletFile::from_seed(TEST_SEED);
        assert_eq!(w.seed, TEST_SEED);
        assert_eq!(w.balance_units, 0);
        assert_eq!(w.decimals, 8);
        assert_eq!(w.network, "NEXAI-NXI");
    }

    #[test]
    fn generated_wallets_differ() {
        let a = WalletFile::generate();
        let b = WalletFile::generate();
        assert_eq!(a.seed.len(), 64);
        assert_ne!(a.seed, b.seed);
        assert_ne!(a.address, b.address);
        assert_eq!(a.address, address_from_seed(&a.seed));
    }

    #[test]
    fn file_name_uses_address_prefix() {
        let w = WalletFile::from_seed(TEST_SEED);
        let name = w.default_file_name();
        assert_eq!(name, format!("wallet_{}.json", &w.address[..10]));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = WalletFile::from_seed(TEST_SEED);
        w.balance_units = 1_234_500_000;

        let path = w.save(dir.path()).unwrap();
        let loaded = WalletFile::load(&path).unwrap();
        assert_eq!(loaded, w);
    }

    #[test]
    fn save_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let w = WalletFile::from_seed(TEST_SEED);
        w.save(dir.path()).unwrap();

        assert!(matches!(
            w.save(dir.path()),
            Err(WalletError::AlreadyExists(_))
        ));
    }

    #[test]
    fn load_reads_foreign_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w.json");
        fs::write(
            &path,
            r#"{"network":"NEXAI-NXI","decimals":8,"balance_units":150000000,"seed":"s","address":"a"}"#,
        )
        .unwrap();

        let w = WalletFile::load(&path).unwrap();
        assert_eq!(w.display_balance().unwrap(), "1.50000000");
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("w.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(WalletFile::load(&path), Err(WalletError::Json(_))));
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(
            WalletFile::load("/definitely/not/here.json"),
            Err(WalletError::Io(_))
        ));
    }

    #[test]
    fn display_balance_respects_decimals() {
        let mut w = WalletFile::from_seed(TEST_SEED);
        w.balance_units = 1050;
        w.decimals = 2;
        assert_eq!(w.display_balance().unwrap(), "10.50");

        w.decimals = 0;
        assert_eq!(w.display_balance().unwrap(), "1050");

        w.decimals = 40;
        assert!(matches!(
            w.display_balance(),
            Err(WalletError::UnsupportedDecimals(40))
        ));
    }

    #[test]
    fn summary_lists_every_field() {
        let w = WalletFile::from_seed(TEST_SEED);
        let s = w.summary().unwrap();
        assert!(s.contains("NEXAI-NXI"));
        assert!(s.contains(&w.address));
        assert!(s.contains(TEST_SEED));
        assert!(s.contains("0.00000000 NXI"));
    }
}
