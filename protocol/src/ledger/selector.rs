//! # Stake-Weighted Validator Selection
//!
//! Picks up to `k` distinct positive-balance holders to share a transfer's
//! fee. Each draw from a [`HashStream`] seeded with the transaction id is
//! reduced modulo total stake to a target `r`; walking the holders in
//! first-credit order and accumulating stake, the first holder whose running
//! total exceeds `r` is the candidate. Duplicates are skipped.
//!
//! A holder with 90% of the stake will win most draws, so reaching `k`
//! distinct validators can take many attempts. The loop stops once the
//! draw counter passes `SELECTION_ATTEMPT_FACTOR * k`, which caps the work
//! at `20k + 1` draws no matter how lopsided the stake is.

use tracing::debug;

use super::balance::BalanceBook;
use crate::config::SELECTION_ATTEMPT_FACTOR;
use crate::crypto::HashStream;

/// Selects up to `k` validators from `snapshot`, seeded by `tx_id`.
///
/// Pure: reads the snapshot, never mutates it. Returns an empty list when
/// `k == 0` or no address holds a positive balance.
pub fn select_validators(tx_id: &str, snapshot: &BalanceBook, k: usize) -> Vec<String> {
    let holders = snapshot.holders();
    let target = k.min(holders.len());
    if target == 0 {
        return Vec::new();
    }

    // Bounded by the book's circulating total, so no overflow.
    let total_stake: u64 = holders.iter().map(|(_, units)| units).sum();
    let max_draws = (k as u64).saturating_mul(SELECTION_ATTEMPT_FACTOR as u64);

    let mut stream = HashStream::new(tx_id);
    let mut chosen: Vec<String> = Vec::with_capacity(target);

    while chosen.len() < target {
        let r = stream.next_below(total_stake);
        if let Some(candidate) = holder_at(&holders, r) {
            if !chosen.iter().any(|c| c == candidate) {
                chosen.push(candidate.to_string());
            }
        }
        if stream.draws() > max_draws {
            break;
        }
    }

    debug!(
        tx_id,
        holders = holders.len(),
        selected = chosen.len(),
        draws = stream.draws(),
        "validators selected"
    );
    chosen
}

/// First holder whose cumulative stake exceeds `r`.
fn holder_at<'a>(holders: &[(&'a str, u64)], r: u64) -> Option<&'a str> {
    let mut cumulative = 0u64;
    for &(address, units) in holders {
        cumulative += units;
        if r < cumulative {
            return Some(address);
        }
    }
    None
}
