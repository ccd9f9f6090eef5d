//! User-adjustable market and compensation assumptions

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::money::Cents;
use crate::offer::Offer;

pub use loader::{load_parameter_grid, load_parameter_grid_from_reader};

/// Default annual valuation growth (%)
pub const DEFAULT_ANNUAL_GROWTH_RATE: f64 = 30.0;
/// Default exit / liquidity year
pub const DEFAULT_EXIT_YEAR: u32 = 5;
/// Default annual salary increase (%)
pub const DEFAULT_SALARY_INCREASE_RATE: f64 = 5.0;
/// Default bonus as a share of salary (%)
pub const DEFAULT_BONUS_RATE: f64 = 10.0;
/// Default annual refresh as a share of the original grant (%)
pub const DEFAULT_EQUITY_REFRESH_RATE: f64 = 5.0;

/// Assumptions for one projection run
///
/// Values are taken as given: no range clamping happens here, and zero or
/// negative rates are valid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParameters {
    /// Annual company valuation growth (%)
    pub annual_growth_rate: f64,

    /// Year whose row is surfaced as the exit summary
    pub exit_year: u32,

    /// Annual salary increase (%)
    pub salary_increase_rate: f64,

    /// Annual bonus as a share of that year's salary (%)
    pub bonus_rate: f64,

    /// Annual refresh grant as a share of the original grant (%)
    pub equity_refresh_rate: f64,

    /// Starting valuation; `None` uses the offer's valuation
    pub current_valuation: Option<Cents>,
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            annual_growth_rate: DEFAULT_ANNUAL_GROWTH_RATE,
            exit_year: DEFAULT_EXIT_YEAR,
            salary_increase_rate: DEFAULT_SALARY_INCREASE_RATE,
            bonus_rate: DEFAULT_BONUS_RATE,
            equity_refresh_rate: DEFAULT_EQUITY_REFRESH_RATE,
            current_valuation: None,
        }
    }
}

impl ProjectionParameters {
    /// Defaults seeded with the slider defaults the offer carries
    ///
    /// A stored slider of `0` is kept as 0%; only a missing slider uses the default.
    pub fn for_offer(offer: &Offer) -> Self {
        let sliders = &offer.slider_defaults;
        Self {
            salary_increase_rate: sliders.annual_salary_increase.unwrap_or(DEFAULT_SALARY_INCREASE_RATE),
            bonus_rate: sliders.bonus_percentage.unwrap_or(DEFAULT_BONUS_RATE),
            equity_refresh_rate: sliders.equity_refresh.unwrap_or(DEFAULT_EQUITY_REFRESH_RATE),
            ..Self::default()
        }
    }

    /// Starting valuation for an offer, falling back to the offer's own
    pub fn starting_valuation(&self, offer: &Offer) -> Cents {
        self.current_valuation.unwrap_or(offer.valuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::SliderDefaults;

    fn test_offer() -> Offer {
        Offer::new(Cents(15_000_000), 20_000, Cents(3_100_000_000_000), Cents(210))
    }

    #[test]
    fn test_defaults() {
        let params = ProjectionParameters::default();
        assert_eq!(params.annual_growth_rate, 30.0);
        assert_eq!(params.exit_year, 5);
        assert_eq!(params.salary_increase_rate, 5.0);
        assert_eq!(params.bonus_rate, 10.0);
        assert_eq!(params.equity_refresh_rate, 5.0);
        assert_eq!(params.starting_valuation(&test_offer()), Cents(3_100_000_000_000));
    }

    #[test]
    fn test_for_offer_uses_slider_defaults() {
        let offer = Offer {
            slider_defaults: SliderDefaults {
                annual_salary_increase: Some(3.0),
                bonus_percentage: None,
                equity_refresh: Some(0.0),
            },
            ..test_offer()
        };
        let params = ProjectionParameters::for_offer(&offer);
        assert_eq!(params.salary_increase_rate, 3.0);
        assert_eq!(params.bonus_rate, DEFAULT_BONUS_RATE);
        assert_eq!(params.equity_refresh_rate, 0.0);
        assert_eq!(params.annual_growth_rate, DEFAULT_ANNUAL_GROWTH_RATE);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let params: ProjectionParameters =
            serde_json::from_str(r#"{ "annual_growth_rate": -10, "current_valuation": 500 }"#).unwrap();
        assert_eq!(params.annual_growth_rate, -10.0);
        assert_eq!(params.current_valuation, Some(Cents(500)));
        assert_eq!(params.exit_year, DEFAULT_EXIT_YEAR);
    }
}
