//! Core projection engine for yearly compensation projections

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::exercise::{exercise_cost, full_grant_exercise_cost};
use super::rows::{ProjectionResult, YearProjection};
use super::state::ProjectionState;
use super::valuation::{self, ValuationPoint};
use super::vesting::{self, VestingPoint};
use crate::offer::{Offer, DEFAULT_SHARES_OUTSTANDING};
use crate::parameters::ProjectionParameters;

/// Number of years in every projection
pub const PROJECTION_YEARS: u32 = 10;

/// Cash compensation for one year, in dollars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashCompensation {
    pub salary: f64,
    pub bonus: f64,
    pub total_cash: f64,
}

impl CashCompensation {
    pub fn new(salary: f64, bonus_rate: f64) -> Self {
        let bonus = salary * (bonus_rate / 100.0);
        Self {
            salary,
            bonus,
            total_cash: salary + bonus,
        }
    }
}

/// Combine one year's valuation, vesting, exercise cost and cash into a row
///
/// Total compensation adds the year's unrealized equity gain (a point-in-time
/// value) to that year's cash (a flow). The figure is illustrative, not an
/// accounting measure.
pub fn aggregate(
    year: u32,
    valuation: &ValuationPoint,
    vesting: &VestingPoint,
    investment_cost: f64,
    strike_price: f64,
    cash: &CashCompensation,
) -> YearProjection {
    let gain_per_unit = valuation.price_per_share - strike_price;
    let unrealized_gain = vesting.vested_units * gain_per_unit;
    let net_gain = unrealized_gain - investment_cost;

    YearProjection {
        year,
        valuation: valuation.valuation,
        price_per_share: valuation.price_per_share,
        vested_units: vesting.vested_units.floor(),
        total_granted_units: vesting.total_granted_units.floor(),
        equity_value: vesting.vested_units * valuation.price_per_share,
        investment_cost,
        unrealized_gain,
        net_gain,
        salary: cash.salary,
        bonus: cash.bonus,
        total_cash: cash.total_cash,
        total_comp: cash.total_cash + net_gain,
    }
}

/// Shares outstanding for price-per-share, never zero
///
/// A zero share count falls back to the default rather than dividing by it.
pub fn effective_shares_outstanding(offer: &Offer) -> u64 {
    if offer.shares_outstanding == 0 {
        warn!(
            "offer has zero shares outstanding; using default of {}",
            DEFAULT_SHARES_OUTSTANDING
        );
        DEFAULT_SHARES_OUTSTANDING
    } else {
        offer.shares_outstanding
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    parameters: ProjectionParameters,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given parameters
    pub fn new(parameters: ProjectionParameters) -> Self {
        Self { parameters }
    }

    /// Run the ten-year projection for a single offer
    ///
    /// Pure: identical inputs always give identical output.
    pub fn project_offer(&self, offer: &Offer) -> ProjectionResult {
        let shares_outstanding = effective_shares_outstanding(offer);
        let current_valuation = self.parameters.starting_valuation(offer).to_dollars();
        let strike_price = offer.strike_price.to_dollars();

        debug!(
            "projecting offer: units={} valuation=${:.0} strike=${:.2} growth={}%",
            offer.equity_units, current_valuation, strike_price, self.parameters.annual_growth_rate
        );

        let mut result = ProjectionResult::new(self.parameters.exit_year);
        result.ownership_percent = offer.ownership_percent();
        result.full_grant_exercise_cost =
            full_grant_exercise_cost(&offer.equity_packages, offer.equity_units, strike_price);

        let mut state = ProjectionState::from_offer(offer);

        for _year in 1..=PROJECTION_YEARS {
            state.advance_year(self.parameters.salary_increase_rate);

            let row = self.calculate_year(offer, &state, current_valuation, strike_price, shares_outstanding);
            result.add_row(row);
        }

        result
    }

    /// Calculate the row for the state's current year
    fn calculate_year(
        &self,
        offer: &Offer,
        state: &ProjectionState,
        current_valuation: f64,
        strike_price: f64,
        shares_outstanding: u64,
    ) -> YearProjection {
        let params = &self.parameters;

        let valuation = valuation::project(current_valuation, params.annual_growth_rate, state.year, shares_outstanding);
        let vesting = vesting::vesting_at(offer.equity_units, params.equity_refresh_rate, state.year);

        // Cost follows the original grant's vested units through the package order
        let investment_cost = exercise_cost(&offer.equity_packages, vesting.vested_units, strike_price);

        let cash = CashCompensation::new(state.salary, params.bonus_rate);

        aggregate(state.year, &valuation, &vesting, investment_cost, strike_price, &cash)
    }
}
