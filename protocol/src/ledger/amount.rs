//! Conversion between display amounts and base units.
//!
//! Callers speak in display units (`f64` NXI). The ledger only ever stores
//! integer base units. Conversion happens once, at the API boundary, by
//! multiplying by [`UNIT`] and truncating toward zero. For the non-negative
//! inputs we accept, truncation and floor agree, so `0.000000009 NXI`
//! becomes `0` units rather than rounding up to `1`.

use super::error::LedgerError;
use crate::config::{DECIMALS, TOKEN_TICKER, UNIT};

/// Converts a display amount to base units, truncating.
///
/// # Errors
///
/// [`LedgerError::InvalidAmount`] for negative, NaN, infinite, or
/// out-of-range inputs. A positive input below one base unit is *not* an
/// error here; it converts to `0` and the caller decides whether zero is
/// acceptable.
pub fn to_units(display: f64) -> Result<u64, LedgerError> {
    if !display.is_finite() {
        return Err(LedgerError::InvalidAmount(format!(
            "{display} is not a finite number"
        )));
    }
    if display < 0.0 {
        return Err(LedgerError::InvalidAmount(format!(
            "{display} is negative"
        )));
    }
    let scaled = display * UNIT as f64;
    if scaled >= u64::MAX as f64 {
        return Err(LedgerError::InvalidAmount(format!(
            "{display} exceeds the representable range"
        )));
    }
    Ok(scaled.trunc() as u64)
}

/// Converts base units back to a display amount.
///
/// Lossy above 2^53 units; use [`format_units`] when exact output matters.
pub fn to_display(units: u64) -> f64 {
    units as f64 / UNIT as f64
}

/// Exact decimal rendering of a base-unit amount, e.g. `"12.34500000"`.
pub fn format_units(units: u64) -> String {
    let whole = units / UNIT;
    let frac = units % UNIT;
    format!("{}.{:0>width$}", whole, frac, width = DECIMALS as usize)
}

/// [`format_units`] followed by the ticker, e.g. `"12.34500000 NXI"`.
pub fn format_with_ticker(units: u64) -> String {
    format!("{} {}", format_units(units), TOKEN_TICKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_scale_exactly() {
        assert_eq!(to_units(1.0).unwrap(), UNIT);
        assert_eq!(to_units(1_000_000.0).unwrap(), 1_000_000 * UNIT);
        assert_eq!(to_units(10_000_000_000.0).unwrap(), 10_000_000_000 * UNIT);
    }

    #[test]
    fn fractional_amounts_truncate() {
        assert_eq!(to_units(12.345).unwrap(), 1_234_500_000);
        assert_eq!(to_units(0.00001).unwrap(), 1_000);
        // Below one base unit floors to zero.
        assert_eq!(to_units(0.000_000_009).unwrap(), 0);
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(to_units(0.0).unwrap(), 0);
    }

    #[test]
    fn negative_rejected() {
        assert!(matches!(to_units(-1.0), Err(LedgerError::InvalidAmount(_))));
    }

    #[test]
    fn non_finite_rejected() {
        assert!(to_units(f64::NAN).is_err());
        assert!(to_units(f64::INFINITY).is_err());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(to_units(1e12).is_err());
    }

    #[test]
    fn format_pads_fraction() {
        assert_eq!(format_units(1_234_500_000), "12.34500000");
        assert_eq!(format_units(1_000), "0.00001000");
        assert_eq!(format_units(0), "0.00000000");
        assert_eq!(format_with_ticker(UNIT), "1.00000000 NXI");
    }

    #[test]
    fn display_roundtrip_for_small_values() {
        assert_eq!(to_display(150_000_000), 1.5);
    }
}
