//! Load offers from the offer application's JSON records
//!
//! The records carry a lot of presentation data (candidate, benefits,
//! theme); only the grant terms are read, everything else is ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EquityPackage, EquityPackages, Offer, SliderDefaults, UnitType, DEFAULT_SHARES_OUTSTANDING};
use crate::error::{ProjectionError, Result};
use crate::money::Cents;

/// Raw offer record as produced by the offer form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfferRecord {
    #[serde(default)]
    pub annual_salary_cents: i64,
    #[serde(default)]
    pub equity_units: Option<u64>,
    #[serde(default)]
    pub equity_percent_bps: Option<u32>,
    #[serde(default)]
    pub equity_packages: Option<Vec<PackageRecord>>,
    #[serde(default)]
    pub organization: Option<OrganizationRecord>,
    #[serde(default)]
    pub customization: Option<CustomizationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRecord {
    pub equity_units: u64,
    pub equity_unit_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationRecord {
    #[serde(default)]
    pub valuation_cents: Option<i64>,
    #[serde(default)]
    pub strike_price_cents: Option<i64>,
    #[serde(default)]
    pub shares_outstanding: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomizationRecord {
    #[serde(default)]
    pub financials: Option<FinancialsRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialsRecord {
    #[serde(default)]
    pub sliders: Option<SlidersRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlidersRecord {
    #[serde(rename = "defaultAnnualSalaryIncrease", default)]
    pub default_annual_salary_increase: Option<f64>,
    #[serde(rename = "defaultBonusPercentage", default)]
    pub default_bonus_percentage: Option<f64>,
    #[serde(rename = "defaultEquityRefresh", default)]
    pub default_equity_refresh: Option<f64>,
}

/// A file may hold one offer or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OfferInput {
    Many(Vec<OfferRecord>),
    One(OfferRecord),
}

impl OfferRecord {
    pub fn to_offer(self) -> Result<Offer> {
        let packages = match self.equity_packages {
            Some(records) => Some(
                records
                    .into_iter()
                    .map(|pkg| -> Result<EquityPackage> {
                        let unit_type = UnitType::from_code(&pkg.equity_unit_type).ok_or_else(|| {
                            ProjectionError::UnknownUnitType { value: pkg.equity_unit_type.clone() }
                        })?;
                        Ok(EquityPackage::new(pkg.equity_units, unit_type))
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };
        let equity_packages = EquityPackages::from_option(packages);

        // The form stores the package total; older records may only have packages
        let equity_units = self.equity_units.unwrap_or_else(|| equity_packages.listed_units());

        let organization = self.organization.unwrap_or_default();
        let sliders = self
            .customization
            .and_then(|c| c.financials)
            .and_then(|f| f.sliders)
            .unwrap_or_default();

        Ok(Offer {
            annual_salary: Cents(self.annual_salary_cents),
            equity_units,
            equity_packages,
            valuation: Cents(organization.valuation_cents.unwrap_or(0)),
            strike_price: Cents(organization.strike_price_cents.unwrap_or(0)),
            shares_outstanding: organization.shares_outstanding.unwrap_or(DEFAULT_SHARES_OUTSTANDING),
            equity_percent_bps: self.equity_percent_bps,
            slider_defaults: SliderDefaults {
                annual_salary_increase: sliders.default_annual_salary_increase,
                bonus_percentage: sliders.default_bonus_percentage,
                equity_refresh: sliders.default_equity_refresh,
            },
        })
    }
}

/// Parse one offer or a list of offers from a JSON string
pub fn parse_offers(json: &str) -> Result<Vec<Offer>> {
    offers_from_input(serde_json::from_str(json)?)
}

/// Load offers from any reader (e.g., string buffer, request body)
pub fn load_offers_from_reader<R: Read>(reader: R) -> Result<Vec<Offer>> {
    offers_from_input(serde_json::from_reader(reader)?)
}

/// Load offers from a JSON file
pub fn load_offers<P: AsRef<Path>>(path: P) -> Result<Vec<Offer>> {
    let file = File::open(path)?;
    load_offers_from_reader(BufReader::new(file))
}

fn offers_from_input(input: OfferInput) -> Result<Vec<Offer>> {
    let records = match input {
        OfferInput::One(record) => vec![record],
        OfferInput::Many(records) => records,
    };
    records.into_iter().map(OfferRecord::to_offer).collect()
}
