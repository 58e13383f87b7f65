// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # NEXAI Ledger Tool
//!
//! Entry point for the `nexai` binary. Parses CLI arguments, initializes
//! logging, loads ledger params, and dispatches:
//!
//! - `wallet create` — generate a seed and write a wallet file
//! - `wallet open`   — print a wallet file summary
//! - `demo`          — run the reference scenario on an in-memory ledger
//! - `coin-ids`      — print deterministic coin ids for an address
//! - `version`       — print build version information

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use nexai_protocol::config::{LedgerParams, PROTOCOL_VERSION, TOKEN_NAME, TOKEN_TICKER};
use nexai_protocol::crypto::coin_id;
use nexai_protocol::ledger::{format_with_ticker, Ledger};
use nexai_protocol::vault::WalletFile;

use cli::{Commands, NexaiCli, WalletCommand};

const GENESIS: &str = "nexai:genesis";
const ALICE: &str = "wallet:alice";
const BOB: &str = "wallet:bob";

fn main() -> Result<()> {
    let cli = NexaiCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Commands::Wallet(WalletCommand::Create(args)) => create_wallet(args),
        Commands::Wallet(WalletCommand::Open(args)) => open_wallet(args),
        Commands::Demo(args) => run_demo(load_params(cli.config.as_deref())?, args),
        Commands::CoinIds(args) => {
            print_coin_ids(args);
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Loads params from `path`, or the defaults when no path is given.
fn load_params(path: Option<&std::path::Path>) -> Result<LedgerParams> {
    match path {
        Some(p) => LedgerParams::from_toml_file(p)
            .with_context(|| format!("failed to load ledger params from {}", p.display())),
        None => Ok(LedgerParams::default()),
    }
}

/// Generates a wallet and writes it to the target directory.
fn create_wallet(args: cli::CreateArgs) -> Result<()> {
    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("failed to create directory: {}", args.dir.display()))?;

    let wallet = WalletFile::generate();
    let path = wallet
        .save(&args.dir)
        .with_context(|| format!("failed to write wallet into {}", args.dir.display()))?;

    println!("Wallet created.");
    println!("  File    : {}", path.display());
    println!("  Address : {}", wallet.address);
    println!("  Seed    : {}  (keep this secret)", wallet.seed);
    Ok(())
}

/// Prints the summary of an existing wallet file.
fn open_wallet(args: cli::OpenArgs) -> Result<()> {
    let wallet = WalletFile::load(&args.file)
        .with_context(|| format!("failed to open wallet file {}", args.file.display()))?;
    println!("{}", wallet.summary()?);
    Ok(())
}

/// Mints the whole supply to genesis, funds alice and bob, then moves
/// 12.345 NXI from alice to bob.
fn run_demo(params: LedgerParams, args: cli::DemoArgs) -> Result<()> {
    let mut ledger = Ledger::with_params(params);
    tracing::info!(token = TOKEN_NAME, "running demo scenario");

    let supply = ledger.params().total_supply_units;
    ledger
        .mint_units(GENESIS, supply)
        .context("genesis mint failed")?;
    ledger
        .transfer(GENESIS, ALICE, 1_000_000.0)
        .context("genesis -> alice failed")?;
    ledger
        .transfer(GENESIS, BOB, 500_000.0)
        .context("genesis -> bob failed")?;
    let receipt = ledger
        .transfer(ALICE, BOB, 12.345)
        .context("alice -> bob failed")?;

    if args.json {
        println!("{}", ledger.export_json()?);
        return Ok(());
    }

    println!("Balances:");
    for address in [GENESIS, ALICE, BOB] {
        println!(
            "  {:<14} {}",
            address,
            format_with_ticker(ledger.balance_units(address))
        );
    }
    println!();
    println!("Last transfer:");
    println!("  tx         : {}", receipt.tx_id);
    println!("  validators : {}", receipt.validators.join(", "));
    println!();
    println!("Supply:");
    println!("  total       {}", format_with_ticker(ledger.total_supply()));
    println!(
        "  circulating {}",
        format_with_ticker(ledger.circulating_supply())
    );
    println!("  burned      {}", format_with_ticker(ledger.burned()));
    println!();
    println!("Recent ledger entries:");
    for record in ledger.recent_records(args.recent) {
        println!(
            "  {} {} -> {} amount={} fee={} validators=[{}]",
            &record.tx_id[..16],
            record.sender,
            record.recipient,
            record.amount,
            record.fee,
            record.validators.join(", ")
        );
    }
    Ok(())
}

/// Prints `count` coin ids for an address starting at `start`.
fn print_coin_ids(args: cli::CoinIdsArgs) {
    for i in args.start..args.start.saturating_add(args.count as u64) {
        println!("{:>6}  {}", i, coin_id(&args.address, i));
    }
}

/// Prints version information to stdout.
fn print_version() {
    println!("nexai    {}", env!("CARGO_PKG_VERSION"));
    println!("protocol {} ({})", PROTOCOL_VERSION, TOKEN_TICKER);
}
