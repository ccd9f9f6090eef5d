//! Scenario runner for batch projections
//!
//! Runs one offer under many parameter sets, or many offers under one
//! parameter set. Every projection is independent, so batches run in
//! parallel.

use rayon::prelude::*;

use crate::error::{ProjectionError, Result};
use crate::offer::Offer;
use crate::parameters::ProjectionParameters;
use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::repository::{OfferId, OfferRepository};

/// Batch projection runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Run many scenarios with different growth assumptions
/// let grid: Vec<_> = [10.0, 30.0, 50.0]
///     .iter()
///     .map(|&g| ProjectionParameters { annual_growth_rate: g, ..Default::default() })
///     .collect();
/// let results = runner.run_scenarios(&offer, &grid);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Parameters used when a run does not supply its own
    base_parameters: Option<ProjectionParameters>,
}

impl ScenarioRunner {
    /// Create runner that seeds each offer from its own slider defaults
    pub fn new() -> Self {
        Self { base_parameters: None }
    }

    /// Create runner with fixed base parameters for every offer
    pub fn with_parameters(parameters: ProjectionParameters) -> Self {
        Self {
            base_parameters: Some(parameters),
        }
    }

    /// Parameters a run uses for `offer`
    pub fn parameters_for(&self, offer: &Offer) -> ProjectionParameters {
        self.base_parameters
            .unwrap_or_else(|| ProjectionParameters::for_offer(offer))
    }

    /// Run a single projection with the base parameters
    pub fn run(&self, offer: &Offer) -> ProjectionResult {
        ProjectionEngine::new(self.parameters_for(offer)).project_offer(offer)
    }

    /// Run projections for multiple offers with the base parameters
    pub fn run_batch(&self, offers: &[Offer]) -> Vec<ProjectionResult> {
        offers.par_iter().map(|offer| self.run(offer)).collect()
    }

    /// Run multiple scenarios (different parameters) for a single offer
    pub fn run_scenarios(&self, offer: &Offer, grid: &[ProjectionParameters]) -> Vec<ProjectionResult> {
        grid.par_iter()
            .map(|params| ProjectionEngine::new(*params).project_offer(offer))
            .collect()
    }

    /// Look up a stored offer and project it
    pub fn run_stored<R: OfferRepository>(&self, repo: &R, id: OfferId) -> Result<ProjectionResult> {
        let stored = repo.get(id).ok_or(ProjectionError::OfferNotFound { id })?;
        Ok(self.run(&stored.offer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Cents;
    use crate::offer::SliderDefaults;
    use crate::repository::InMemoryOfferRepository;

    fn test_offer() -> Offer {
        Offer::new(Cents(15_000_000), 20_000, Cents(3_100_000_000_000), Cents(210))
    }

    #[test]
    fn test_scenario_grid() {
        let runner = ScenarioRunner::new();
        let grid: Vec<_> = [10.0, 30.0, 50.0]
            .iter()
            .map(|&g| ProjectionParameters { annual_growth_rate: g, ..Default::default() })
            .collect();

        let results = runner.run_scenarios(&test_offer(), &grid);
        assert_eq!(results.len(), 3);

        // Higher growth should give a higher exit valuation, in grid order
        let exit: Vec<f64> = results.iter().map(|r| r.exit().unwrap().valuation).collect();
        assert!(exit[0] < exit[1] && exit[1] < exit[2]);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::with_parameters(ProjectionParameters::default());
        let offers = vec![test_offer(), Offer::new(Cents(9_000_000), 4_000, Cents(500_000_000), Cents(0))];

        let batch = runner.run_batch(&offers);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], runner.run(&offers[0]));
        assert_eq!(batch[1], runner.run(&offers[1]));
    }

    #[test]
    fn test_offer_slider_defaults_seed_parameters() {
        let offer = Offer {
            slider_defaults: SliderDefaults { bonus_percentage: Some(0.0), ..Default::default() },
            ..test_offer()
        };
        let result = ScenarioRunner::new().run(&offer);
        assert!(result.years.iter().all(|r| r.bonus == 0.0));

        let fixed = ScenarioRunner::with_parameters(ProjectionParameters::default()).run(&offer);
        assert!(fixed.years.iter().all(|r| r.bonus > 0.0));
    }

    #[test]
    fn test_run_stored() {
        let repo = InMemoryOfferRepository::with_offers([test_offer()]);
        let id = repo.list()[0].id;
        let runner = ScenarioRunner::new();

        assert_eq!(runner.run_stored(&repo, id).unwrap(), runner.run(&test_offer()));
        assert!(matches!(
            runner.run_stored(&repo, id + 1),
            Err(ProjectionError::OfferNotFound { .. })
        ));
    }
}
