//! Minor-unit currency amounts
//!
//! Offers carry money as integer cents. Every projection step works in
//! decimal dollars, so the conversion happens exactly once, through
//! [`Cents::to_dollars`], where an input amount first enters a calculation.

use serde::{Deserialize, Serialize};

/// Minor units per major currency unit (cents per dollar)
pub const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// An amount of money in minor currency units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Convert to decimal major units (dollars)
    pub fn to_dollars(self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_MAJOR
    }
}
