//! Offer data structures matching the offer application's grant terms

use serde::{Deserialize, Serialize};

use crate::money::Cents;

/// Shares outstanding assumed when an offer does not state one
pub const DEFAULT_SHARES_OUTSTANDING: u64 = 10_000_000;

/// Type of equity unit in a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// Incentive stock option
    Iso,
    /// Non-qualified stock option
    Nso,
    /// Restricted stock unit
    Rsu,
}

impl UnitType {
    /// Option types require paying the strike price to exercise
    pub fn is_option(&self) -> bool {
        matches!(self, UnitType::Iso | UnitType::Nso)
    }

    /// Parse the lowercase/uppercase code used by the offer form
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "iso" => Some(UnitType::Iso),
            "nso" => Some(UnitType::Nso),
            "rsu" => Some(UnitType::Rsu),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Iso => "ISO",
            UnitType::Nso => "NSO",
            UnitType::Rsu => "RSU",
        }
    }
}

/// One block of granted units of a single type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityPackage {
    pub units: u64,
    pub unit_type: UnitType,
}

impl EquityPackage {
    pub fn new(units: u64, unit_type: UnitType) -> Self {
        Self { units, unit_type }
    }
}

/// The package breakdown of a grant
///
/// Package order is allocation priority: earlier packages vest first for
/// exercise-cost purposes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "packages", rename_all = "lowercase", from = "PackagesRepr")]
pub enum EquityPackages {
    /// No breakdown supplied; every unit is priced as an option
    #[default]
    Unspecified,
    /// Ordered package list
    Listed(Vec<EquityPackage>),
}

/// Wire shape of [`EquityPackages`]; an empty `listed` collapses to unspecified
#[derive(Deserialize)]
#[serde(tag = "kind", content = "packages", rename_all = "lowercase")]
enum PackagesRepr {
    Unspecified,
    Listed(Vec<EquityPackage>),
}

impl From<PackagesRepr> for EquityPackages {
    fn from(repr: PackagesRepr) -> Self {
        match repr {
            PackagesRepr::Unspecified => EquityPackages::Unspecified,
            PackagesRepr::Listed(list) => EquityPackages::from_option(Some(list)),
        }
    }
}

impl EquityPackages {
    /// Absent and empty lists both mean "no breakdown"
    pub fn from_option(packages: Option<Vec<EquityPackage>>) -> Self {
        match packages {
            Some(list) if !list.is_empty() => EquityPackages::Listed(list),
            _ => EquityPackages::Unspecified,
        }
    }

    /// Packages to allocate against, `None` when there is no usable breakdown
    pub fn breakdown(&self) -> Option<&[EquityPackage]> {
        match self {
            EquityPackages::Listed(list) if !list.is_empty() => Some(list),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> &[EquityPackage] {
        match self {
            EquityPackages::Unspecified => &[],
            EquityPackages::Listed(list) => list,
        }
    }

    /// Sum of units across listed packages
    pub fn listed_units(&self) -> u64 {
        self.as_slice().iter().map(|p| p.units).sum()
    }
}

/// Slider defaults an offer may carry for its projection controls (percent)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SliderDefaults {
    pub annual_salary_increase: Option<f64>,
    pub bonus_percentage: Option<f64>,
    pub equity_refresh: Option<f64>,
}

/// Grant terms of a single job offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Annual base salary
    pub annual_salary: Cents,

    /// Total granted equity units across all packages
    pub equity_units: u64,

    /// Package breakdown of the grant
    #[serde(default)]
    pub equity_packages: EquityPackages,

    /// Organization valuation
    pub valuation: Cents,

    /// Strike price per unit (zero when there is none)
    #[serde(default)]
    pub strike_price: Cents,

    /// Shares outstanding used for price-per-share
    #[serde(default = "default_shares_outstanding")]
    pub shares_outstanding: u64,

    /// Ownership in basis points, when the offer states it
    #[serde(default)]
    pub equity_percent_bps: Option<u32>,

    /// Per-offer defaults for the projection parameters
    #[serde(default)]
    pub slider_defaults: SliderDefaults,
}

fn default_shares_outstanding() -> u64 {
    DEFAULT_SHARES_OUTSTANDING
}

impl Offer {
    /// Create an offer with no package breakdown and default share count
    pub fn new(annual_salary: Cents, equity_units: u64, valuation: Cents, strike_price: Cents) -> Self {
        Self {
            annual_salary,
            equity_units,
            equity_packages: EquityPackages::Unspecified,
            valuation,
            strike_price,
            shares_outstanding: DEFAULT_SHARES_OUTSTANDING,
            equity_percent_bps: None,
            slider_defaults: SliderDefaults::default(),
        }
    }

    pub fn with_packages(mut self, packages: Vec<EquityPackage>) -> Self {
        self.equity_packages = EquityPackages::from_option(Some(packages));
        self
    }

    pub fn with_shares_outstanding(mut self, shares: u64) -> Self {
        self.shares_outstanding = shares;
        self
    }

    /// Ownership as a percentage (20 bps = 0.2%)
    pub fn ownership_percent(&self) -> Option<f64> {
        self.equity_percent_bps.map(|bps| bps as f64 / 100.0)
    }
}
