//! Projection output structures

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// A single row of projection output for one year
///
/// Unit counts are floored; currency values are dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: u32,

    // Company
    pub valuation: f64,
    pub price_per_share: f64,

    // Equity
    pub vested_units: f64,
    pub total_granted_units: f64,
    pub equity_value: f64,
    pub investment_cost: f64,
    pub unrealized_gain: f64,
    pub net_gain: f64,

    // Cash
    pub salary: f64,
    pub bonus: f64,
    pub total_cash: f64,

    /// Cash plus net equity gain
    pub total_comp: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Year selected for the exit summary
    pub exit_year: u32,

    /// Yearly rows, year 1 first
    pub years: Vec<YearProjection>,

    /// Cost of exercising every option unit in the original grant
    pub full_grant_exercise_cost: f64,

    /// Ownership stated on the offer (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_percent: Option<f64>,
}

impl ProjectionResult {
    pub fn new(exit_year: u32) -> Self {
        Self {
            exit_year,
            years: Vec::new(),
            full_grant_exercise_cost: 0.0,
            ownership_percent: None,
        }
    }

    /// Add a year row
    pub fn add_row(&mut self, row: YearProjection) {
        self.years.push(row);
    }

    /// Row for `year` (1-indexed)
    pub fn at_year(&self, year: u32) -> Option<&YearProjection> {
        if year == 0 {
            return None;
        }
        self.years.get(year as usize - 1)
    }

    /// Row for the selected exit year
    pub fn exit(&self) -> Result<&YearProjection> {
        self.at_year(self.exit_year).ok_or(ProjectionError::ExitYearOutOfRange {
            year: self.exit_year,
            max: self.years.len() as u32,
        })
    }

    /// Get summary statistics at the exit year
    pub fn summary(&self) -> Result<ProjectionSummary> {
        let exit = self.exit()?;
        let cumulative_cash: f64 = self
            .years
            .iter()
            .take(self.exit_year as usize)
            .map(|r| r.total_cash)
            .sum();

        Ok(ProjectionSummary {
            exit_year: self.exit_year,
            valuation: exit.valuation,
            price_per_share: exit.price_per_share,
            vested_units: exit.vested_units,
            investment_cost: exit.investment_cost,
            net_gain: exit.net_gain,
            total_comp: exit.total_comp,
            cumulative_cash,
            full_grant_exercise_cost: self.full_grant_exercise_cost,
            ownership_percent: self.ownership_percent,
        })
    }

    /// Write all rows as CSV with a header line
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.years {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub exit_year: u32,
    pub valuation: f64,
    pub price_per_share: f64,
    pub vested_units: f64,
    pub investment_cost: f64,
    pub net_gain: f64,
    pub total_comp: f64,
    /// Salary plus bonus summed over years 1 through the exit year
    pub cumulative_cash: f64,
    pub full_grant_exercise_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_percent: Option<f64>,
}
