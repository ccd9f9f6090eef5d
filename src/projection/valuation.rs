//! Company valuation and per-share price projection

use serde::{Deserialize, Serialize};

/// Projected valuation for one year, in dollars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationPoint {
    pub valuation: f64,
    pub price_per_share: f64,
}

/// Growth multiplier after `year` years of compounding at `annual_growth_rate` percent
pub fn growth_multiplier(annual_growth_rate: f64, year: u32) -> f64 {
    (1.0 + annual_growth_rate / 100.0).powi(year as i32)
}

/// Compound `current_valuation` (dollars) forward `year` years
///
/// Zero, negative and non-finite inputs flow straight through the
/// arithmetic; callers decide how to present them.
pub fn project(current_valuation: f64, annual_growth_rate: f64, year: u32, shares_outstanding: u64) -> ValuationPoint {
    let valuation = current_valuation * growth_multiplier(annual_growth_rate, year);
    ValuationPoint {
        valuation,
        price_per_share: valuation / shares_outstanding as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compound_growth() {
        let point = project(31_000_000_000.0, 30.0, 5, 10_000_000);
        assert_relative_eq!(point.valuation, 31_000_000_000.0 * 1.3_f64.powi(5), max_relative = 1e-12);
        assert_relative_eq!(point.price_per_share, 3_100.0 * 1.3_f64.powi(5), max_relative = 1e-12);
    }

    #[test]
    fn test_zero_growth_is_flat() {
        for year in 1..=10 {
            let point = project(1_000_000.0, 0.0, year, 1_000);
            assert_eq!(point.valuation, 1_000_000.0);
            assert_eq!(point.price_per_share, 1_000.0);
        }
    }

    #[test]
    fn test_negative_growth_shrinks() {
        let point = project(1_000_000.0, -50.0, 2, 1_000);
        assert_relative_eq!(point.valuation, 250_000.0, max_relative = 1e-12);

        // -100% wipes the company out; no panic
        let point = project(1_000_000.0, -100.0, 3, 1_000);
        assert_eq!(point.valuation, 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let point = project(1_000_000.0, f64::NAN, 1, 1_000);
        assert!(point.valuation.is_nan());
        assert!(point.price_per_share.is_nan());
    }
}
