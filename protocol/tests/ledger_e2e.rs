//! End-to-end tests for the NEXAI ledger.
//!
//! These drive the public API only: mint, transfer, queries and wallet
//! files. Each test builds its own ledger; nothing is shared.

use nexai_protocol::config::{LedgerParams, FEE_UNITS, TOTAL_SUPPLY_UNITS, UNIT};
use nexai_protocol::crypto::{reduce_be, sha256, sha256_hex};
use nexai_protocol::ledger::{select_validators, BalanceBook, Ledger, LedgerError, SharedLedger};
use nexai_protocol::vault::WalletFile;

const GENESIS: &str = "nexai:genesis";
const ALICE: &str = "wallet:alice";
const BOB: &str = "wallet:bob";

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Genesis holds the full supply; alice and bob are funded from it.
fn reference_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.mint(GENESIS, 10_000_000_000.0).unwrap();
    ledger.transfer(GENESIS, ALICE, 1_000_000.0).unwrap();
    ledger.transfer(GENESIS, BOB, 500_000.0).unwrap();
    ledger
}

fn sum_of_balances(ledger: &Ledger) -> u64 {
    ledger.holders().iter().map(|(_, u)| u).sum()
}

// ---------------------------------------------------------------------------
// 1. Reference Scenario
// ---------------------------------------------------------------------------

#[test]
fn reference_scenario_balances() {
    let mut ledger = reference_ledger();

    assert_eq!(ledger.balance_of(ALICE), 1_000_000.0);
    assert_eq!(ledger.balance_of(BOB), 500_000.0);
    // Fees went to validators, none were burned, so the three balances still
    // add up to the full supply.
    let genesis = ledger.balance_units(GENESIS);
    let alice = ledger.balance_units(ALICE);
    assert_eq!(genesis + alice + ledger.balance_units(BOB), TOTAL_SUPPLY_UNITS);

    let receipt = ledger.transfer(ALICE, BOB, 12.345).unwrap();
    assert_eq!(receipt.fee_paid(), FEE_UNITS);
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.records()[2].amount, 1_234_500_000);
    assert_eq!(sum_of_balances(&ledger), TOTAL_SUPPLY_UNITS);
    assert_eq!(ledger.burned(), 0);
}

#[test]
fn first_transfer_tx_id_is_reproducible() {
    let mut ledger = Ledger::new();
    ledger.mint(GENESIS, 10_000_000_000.0).unwrap();
    let receipt = ledger.transfer(GENESIS, ALICE, 1_000_000.0).unwrap();

    let pair = sha256_hex("nexai:genesiswallet:alice");
    let payload = format!("nexai:genesis->wallet:alice:100000000000000:0:{pair}");
    assert_eq!(receipt.tx_id, sha256_hex(&payload));
}

// ---------------------------------------------------------------------------
// 2. Boundary Balances
// ---------------------------------------------------------------------------

#[test]
fn exact_amount_plus_fee_succeeds() {
    let mut ledger = Ledger::new();
    ledger.mint(GENESIS, 1_000.0).unwrap();
    ledger.mint_units(ALICE, 3 * UNIT + FEE_UNITS).unwrap();

    ledger.transfer(ALICE, BOB, 3.0).unwrap();
    assert_eq!(ledger.balance_units(ALICE), 0);
    assert_eq!(ledger.balance_units(BOB), 3 * UNIT);
}

#[test]
fn one_unit_short_fails_cleanly() {
    let mut ledger = Ledger::new();
    ledger.mint(GENESIS, 1_000.0).unwrap();
    ledger.mint_units(ALICE, 3 * UNIT + FEE_UNITS - 1).unwrap();
    let before: Vec<(String, u64)> = ledger.holders();

    let err = ledger.transfer(ALICE, BOB, 3.0).unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
    assert_eq!(ledger.holders(), before);
    assert!(ledger.is_empty());
}

#[test]
fn unfunded_sender_rejected() {
    let mut ledger = Ledger::new();
    let err = ledger.transfer(ALICE, BOB, 1.0).unwrap_err();
    assert_eq!(
        err,
        LedgerError::InsufficientBalance {
            address: ALICE.into(),
            available: 0,
            required: UNIT + FEE_UNITS,
        }
    );
}

// ---------------------------------------------------------------------------
// 3. Supply
// ---------------------------------------------------------------------------

#[test]
fn supply_ceiling_enforced_across_mints() {
    let mut ledger = Ledger::new();
    ledger.mint(ALICE, 6_000_000_000.0).unwrap();
    ledger.mint(BOB, 4_000_000_000.0).unwrap();

    assert!(matches!(
        ledger.mint_units(GENESIS, 1),
        Err(LedgerError::SupplyExceeded { .. })
    ));
    assert_eq!(ledger.circulating_supply(), TOTAL_SUPPLY_UNITS);
}

#[test]
fn burn_lowers_the_ceiling() {
    let mut ledger = Ledger::with_params(LedgerParams {
        total_supply_units: 10 * UNIT,
        max_validators: 0,
        ..Default::default()
    });
    ledger.mint(ALICE, 10.0).unwrap();
    ledger.transfer(ALICE, BOB, 1.0).unwrap();

    assert_eq!(ledger.total_supply(), 10 * UNIT - FEE_UNITS);
    assert_eq!(ledger.circulating_supply() + ledger.burned(), 10 * UNIT);
    // The burned fee cannot be re-minted.
    assert!(ledger.mint_units(ALICE, 1).is_err());
}

// ---------------------------------------------------------------------------
// 4. Validator Selection
// ---------------------------------------------------------------------------

#[test]
fn selection_uses_pre_transfer_snapshot() {
    // Bob holds nothing before the transfer, so he can never be picked even
    // though he holds stake afterwards.
    let mut ledger = Ledger::new();
    ledger.mint(ALICE, 100.0).unwrap();
    let receipt = ledger.transfer(ALICE, BOB, 99.0).unwrap();
    assert_eq!(receipt.validators, vec![ALICE.to_string()]);
}

#[test]
fn selection_matches_engine_dry_run() {
    let ledger = reference_ledger();
    let tx_id = sha256_hex("arbitrary");
    let a = select_validators(&tx_id, ledger.balances(), 5);
    let b = select_validators(&tx_id, ledger.balances(), 5);
    assert_eq!(a, b);
    assert!(a.len() <= 3);
}

#[test]
fn single_positive_holder_regardless_of_seed() {
    let mut book = BalanceBook::new();
    book.credit("solo", 10).unwrap();
    book.credit("empty", 0).unwrap();
    for i in 0..25 {
        let seed = sha256_hex(&i.to_string());
        assert_eq!(select_validators(&seed, &book, 5), vec!["solo".to_string()]);
    }
}

#[test]
fn seven_holder_transfer_matches_known_vector() {
    let mut ledger = Ledger::new();
    for (i, address) in ["a", "b", "c", "d", "e", "f", "g"].iter().enumerate() {
        ledger.mint(address, 100.0 + i as f64 * 37.5).unwrap();
    }

    let receipt = ledger.transfer("a", "b", 3.3).unwrap();

    assert_eq!(
        receipt.tx_id,
        "8e81769810c7c9020d016e04838923ee1077cae46d951af1c04e161009a5f2d9"
    );
    assert_eq!(receipt.validators, vec!["c", "e", "f", "g", "d"]);
    assert_eq!(receipt.fee_shares, vec![140, 200, 230, 260, 170]);

    let expected = [
        ("a", 9_669_999_000),
        ("b", 14_080_000_000),
        ("c", 17_500_000_140),
        ("d", 21_250_000_170),
        ("e", 25_000_000_200),
        ("f", 28_750_000_230),
        ("g", 32_500_000_260),
    ];
    for (address, units) in expected {
        assert_eq!(ledger.balance_units(address), units, "balance of {address}");
    }
}

#[test]
fn draw_reduction_agrees_with_hex_integer() {
    // A digest reduced mod 2^32 is its last 8 hex chars read as an integer.
    let digest = sha256(b"tx0");
    let hex = hex_tail(&digest, 8);
    assert_eq!(reduce_be(&digest, 1 << 32), u64::from_str_radix(&hex, 16).unwrap());
}

fn hex_tail(digest: &[u8; 32], chars: usize) -> String {
    let full: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    full[full.len() - chars..].to_string()
}

// ---------------------------------------------------------------------------
// 5. Shared Access
// ---------------------------------------------------------------------------

#[test]
fn shared_ledger_wraps_engine() {
    let shared = SharedLedger::new(Ledger::new());
    shared.mint(ALICE, 5.0).unwrap();
    let receipt = shared.transfer(ALICE, BOB, 1.0).unwrap();

    assert_eq!(shared.balance_of(BOB), 1.0);
    assert_eq!(shared.records()[0].tx_id, receipt.tx_id);
}

// ---------------------------------------------------------------------------
// 6. Wallet Files
// ---------------------------------------------------------------------------

#[test]
fn wallet_file_is_independent_of_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = WalletFile::generate();
    let path = wallet.save(dir.path()).unwrap();

    let mut ledger = Ledger::new();
    ledger.mint(&wallet.address, 2.5).unwrap();

    let reloaded = WalletFile::load(&path).unwrap();
    assert_eq!(reloaded.balance_units, 0);
    assert_eq!(ledger.balance_of(&reloaded.address), 2.5);
}
