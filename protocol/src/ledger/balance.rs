//! # Balance Book
//!
//! A [`BalanceBook`] maps addresses to base-unit balances and remembers the
//! order in which each address was first credited. That order is the
//! "fixed deterministic order" the validator selector walks, so it must
//! never depend on hashing: a `HashMap` alone would make validator picks
//! vary between runs.
//!
//! Lookups of unknown addresses return `0` without inserting anything. An
//! address enters the book the first time it is credited (a zero-unit
//! credit still registers it) and stays there even after its balance drops
//! back to zero.
//!
//! The book also tracks the running sum of all balances ("circulating"),
//! updated on every credit and debit, so supply checks don't rescan.

use std::collections::HashMap;

use super::error::LedgerError;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    address: String,
    units: u64,
}

/// Insertion-ordered balance map with an implicit zero for absent keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BalanceBook {
    indices: HashMap<String, usize>,
    entries: Vec<Entry>,
    circulating: u64,
}

impl BalanceBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of `address` in base units; `0` if never credited.
    pub fn get(&self, address: &str) -> u64 {
        self.indices
            .get(address)
            .map(|&i| self.entries[i].units)
            .unwrap_or(0)
    }

    /// Returns `true` if `address` has ever been credited.
    pub fn contains(&self, address: &str) -> bool {
        self.indices.contains_key(address)
    }

    /// Sum of every balance in the book.
    pub fn circulating(&self) -> u64 {
        self.circulating
    }

    /// Number of addresses ever credited, including those now at zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has ever been credited.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `units` to `address`, registering it on first credit.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Overflow`] if the balance or the circulating total
    /// would exceed `u64::MAX`. Nothing is modified in that case.
    pub fn credit(&mut self, address: &str, units: u64) -> Result<u64, LedgerError> {
        let circulating = self
            .circulating
            .checked_add(units)
            .ok_or_else(|| LedgerError::Overflow(address.to_string()))?;

        let index = match self.indices.get(address) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.indices.insert(address.to_string(), i);
                self.entries.push(Entry {
                    address: address.to_string(),
                    units: 0,
                });
                i
            }
        };

        // Every balance is bounded by `circulating`, which was checked above.
        let entry = &mut self.entries[index];
        entry.units += units;
        self.circulating = circulating;
        Ok(entry.units)
    }

    /// Subtracts `units` from `address`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] if the balance is smaller than
    /// `units`. Unknown addresses have a balance of zero.
    pub fn debit(&mut self, address: &str, units: u64) -> Result<u64, LedgerError> {
        let available = self.get(address);
        if available < units {
            return Err(LedgerError::InsufficientBalance {
                address: address.to_string(),
                available,
                required: units,
            });
        }
        if units == 0 {
            return Ok(available);
        }

        // available >= units > 0, so the entry exists.
        let index = self.indices[address];
        let entry = &mut self.entries[index];
        entry.units -= units;
        self.circulating -= units;
        Ok(entry.units)
    }

    /// Positive-balance holders, in first-credit order.
    pub fn holders(&self) -> Vec<(&str, u64)> {
        self.entries
            .iter()
            .filter(|e| e.units > 0)
            .map(|e| (e.address.as_str(), e.units))
            .collect()
    }

    /// Every registered address with its balance, in first-credit order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|e| (e.address.as_str(), e.units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_address_reads_zero_without_inserting() {
        let book = BalanceBook::new();
        assert_eq!(book.get("ghost"), 0);
        assert!(!book.contains("ghost"));
        assert!(book.is_empty());
    }

    #[test]
    fn credit_accumulates_and_tracks_circulating() {
        let mut book = BalanceBook::new();
        book.credit("a", 500).unwrap();
        book.credit("a", 300).unwrap();
        book.credit("b", 200).unwrap();

        assert_eq!(book.get("a"), 800);
        assert_eq!(book.circulating(), 1_000);
    }

    #[test]
    fn debit_to_zero_keeps_registration() {
        let mut book = BalanceBook::new();
        book.credit("a", 500).unwrap();
        assert_eq!(book.debit("a", 500).unwrap(), 0);

        assert!(book.contains("a"));
        assert!(book.holders().is_empty());
        assert_eq!(book.circulating(), 0);
    }

    #[test]
    fn debit_insufficient_rejected() {
        let mut book = BalanceBook::new();
        book.credit("a", 100).unwrap();

        let err = book.debit("a", 200).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                address: "a".into(),
                available: 100,
                required: 200,
            }
        );
        assert_eq!(book.get("a"), 100);
    }

    #[test]
    fn debit_unknown_address_rejected() {
        let mut book = BalanceBook::new();
        assert!(book.debit("ghost", 1).is_err());
        assert!(!book.contains("ghost"));
    }

    #[test]
    fn holders_follow_first_credit_order() {
        let mut book = BalanceBook::new();
        book.credit("zed", 1).unwrap();
        book.credit("alpha", 2).unwrap();
        book.credit("mid", 0).unwrap();
        book.credit("zed", 5).unwrap();

        let order: Vec<&str> = book.holders().iter().map(|(a, _)| *a).collect();
        assert_eq!(order, vec!["zed", "alpha"]);

        let all: Vec<&str> = book.iter().map(|(a, _)| a).collect();
        assert_eq!(all, vec!["zed", "alpha", "mid"]);
    }

    #[test]
    fn overflow_rejected_without_mutation() {
        let mut book = BalanceBook::new();
        book.credit("a", u64::MAX).unwrap();
        assert!(matches!(book.credit("b", 1), Err(LedgerError::Overflow(_))));
        assert!(!book.contains("b"));
        assert_eq!(book.circulating(), u64::MAX);
    }
}
