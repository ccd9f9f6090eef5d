//! Offer Projection - Equity and cash compensation forecasts for job offers
//!
//! This library provides:
//! - Ten-year projections of valuation, vesting, exercise cost and cash pay
//! - Ordered exercise-cost allocation across ISO/NSO/RSU packages
//! - Offer loading from JSON and scenario grids from CSV
//! - An injectable offer repository and a parallel scenario runner

pub mod error;
pub mod money;
pub mod offer;
pub mod parameters;
pub mod projection;
pub mod repository;
pub mod scenario;
pub mod format;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use money::Cents;
pub use offer::{EquityPackage, EquityPackages, Offer, UnitType};
pub use parameters::ProjectionParameters;
pub use projection::{ProjectionEngine, ProjectionResult, ProjectionSummary, YearProjection};
pub use repository::{InMemoryOfferRepository, OfferRepository};
pub use scenario::ScenarioRunner;
