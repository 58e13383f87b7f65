//! Fee splitting across selected validators.
//!
//! Shares are proportional to each validator's stake. Integer division
//! rounds every share down, so the last validator takes whatever is left
//! (`fee - distributed`) and the fee is always paid out in full.
//!
//! When the combined stake is zero the fee is split evenly with plain
//! integer division and the remainder is dropped. That remainder is the
//! only place the ledger loses units silently; the engine logs it.

/// Result of splitting a fee.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    /// One share per stake, in input order.
    pub shares: Vec<u64>,
    /// Units not paid to anyone (even-split remainder only).
    pub dropped: u64,
}

/// Splits `fee` across validators with the given `stakes`.
///
/// Returns an empty split for an empty stake list; the caller burns the fee
/// in that case.
pub fn split_fee(fee: u64, stakes: &[u64]) -> FeeSplit {
    let Some((_, head)) = stakes.split_last() else {
        return FeeSplit {
            shares: Vec::new(),
            dropped: 0,
        };
    };

    let total: u128 = stakes.iter().map(|&s| s as u128).sum();
    if total == 0 {
        let per = fee / stakes.len() as u64;
        return FeeSplit {
            shares: vec![per; stakes.len()],
            dropped: fee - per * stakes.len() as u64,
        };
    }

    let mut shares = Vec::with_capacity(stakes.len());
    let mut distributed = 0u64;
    for &stake in head {
        // stake <= total, so the quotient never exceeds fee.
        let part = (stake as u128 * fee as u128 / total) as u64;
        shares.push(part);
        distributed += part;
    }
    shares.push(fee - distributed);

    FeeSplit { shares, dropped: 0 }
}
