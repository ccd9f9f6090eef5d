//! Standard vesting schedule with annual refresh grants
//!
//! 4-year vest with a 1-year cliff, approximated annually: a quarter of the
//! original grant at the cliff, another quarter each year through year 4.
//!
//! Refresh grants are a fixed share of the *original* grant added every year
//! from year 2. They only raise the cumulative granted count; they are never
//! run through the vesting curve themselves, so refreshed units count as
//! immediately vested in this model.

use serde::{Deserialize, Serialize};

/// Years until the original grant is fully vested
pub const VESTING_YEARS: u32 = 4;

/// Share of the grant that vests at the cliff and each year after
pub const ANNUAL_VEST_FRACTION: f64 = 0.25;

/// Vested and cumulative granted units for one year (unfloored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VestingPoint {
    pub vested_units: f64,
    pub total_granted_units: f64,
}

/// Fraction of the original grant vested at the end of `year`
pub fn vested_fraction(year: u32) -> f64 {
    match year {
        0 => 0.0,
        1..=VESTING_YEARS => ANNUAL_VEST_FRACTION + (year - 1) as f64 * ANNUAL_VEST_FRACTION,
        _ => 1.0,
    }
}

/// Units of the original grant vested at the end of `year`
pub fn vested_units(granted_units: u64, year: u32) -> f64 {
    granted_units as f64 * vested_fraction(year)
}

/// Cumulative granted units at `year`, including refresh grants from year 2 on
pub fn total_granted_units(granted_units: u64, refresh_rate: f64, year: u32) -> f64 {
    let granted = granted_units as f64;
    let refresh_years = year.saturating_sub(1) as f64;
    granted + granted * (refresh_rate / 100.0) * refresh_years
}

/// Vesting position at `year`
pub fn vesting_at(granted_units: u64, refresh_rate: f64, year: u32) -> VestingPoint {
    VestingPoint {
        vested_units: vested_units(granted_units, year),
        total_granted_units: total_granted_units(granted_units, refresh_rate, year),
    }
}
