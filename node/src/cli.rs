//! # CLI Interface
//!
//! Defines the command-line argument structure for `nexai` using `clap`
//! derive. Subcommands: `wallet create`, `wallet open`, `demo`, `coin-ids`
//! and `version`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// NEXAI ledger tool.
///
/// Creates and inspects wallet files, and runs the reference ledger
/// scenario against an in-memory engine.
#[derive(Parser, Debug)]
#[command(
    name = "nexai",
    about = "NEXAI (NXI) ledger tool",
    version,
    propagate_version = true
)]
pub struct NexaiCli {
    /// Path to a ledger params file (TOML). Defaults apply when omitted.
    #[arg(long, short = 'c', global = true, env = "NEXAI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Default log filter when `RUST_LOG` is unset.
    #[arg(long, global = true, env = "NEXAI_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or inspect wallet files.
    #[command(subcommand)]
    Wallet(WalletCommand),
    /// Run the reference scenario: genesis mint, three transfers.
    Demo(DemoArgs),
    /// Print deterministic coin ids for an address.
    CoinIds(CoinIdsArgs),
    /// Print version information and exit.
    Version,
}

/// `wallet` subcommands.
#[derive(Subcommand, Debug)]
pub enum WalletCommand {
    /// Generate a new wallet and write it to disk.
    Create(CreateArgs),
    /// Print the contents of a wallet file.
    Open(OpenArgs),
}

/// Arguments for `wallet create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Directory to write the wallet file into.
    #[arg(long, short = 'd', default_value = ".")]
    pub dir: PathBuf,
}

/// Arguments for `wallet open`.
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Path to the wallet JSON file.
    pub file: PathBuf,
}

/// Arguments for `demo`.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Print the full ledger as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// How many trailing records to show in the text report.
    #[arg(long, default_value_t = 3)]
    pub recent: usize,
}

/// Arguments for `coin-ids`.
#[derive(Args, Debug)]
pub struct CoinIdsArgs {
    /// Address to derive coin ids for.
    pub address: String,

    /// Number of ids to print.
    #[arg(long, short = 'n', default_value_t = 5)]
    pub count: usize,

    /// Index to start from (the address's coin nonce).
    #[arg(long, default_value_t = 0)]
    pub start: u64,
}
