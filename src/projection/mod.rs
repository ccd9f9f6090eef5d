//! Projection engine for ten-year compensation forecasts

mod state;
mod engine;
mod rows;
pub mod valuation;
pub mod vesting;
pub mod exercise;

pub use state::ProjectionState;
pub use engine::{aggregate, effective_shares_outstanding, CashCompensation, ProjectionEngine, PROJECTION_YEARS};
pub use rows::{ProjectionResult, ProjectionSummary, YearProjection};
pub use valuation::ValuationPoint;
pub use vesting::VestingPoint;
pub use exercise::{allocate, exercise_cost, full_grant_exercise_cost, PackageAllocation};
