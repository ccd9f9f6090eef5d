//! Year-over-year state carried through a single projection

use crate::offer::Offer;

/// Recurrences that depend on the previous year
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection year (1-indexed, 0 before the first advance)
    pub year: u32,

    /// Base salary for the current year, in dollars
    pub salary: f64,
}

impl ProjectionState {
    /// Initialize state from an offer at projection start
    pub fn from_offer(offer: &Offer) -> Self {
        Self {
            year: 0,
            salary: offer.annual_salary.to_dollars(),
        }
    }

    /// Advance to next year, applying one annual raise
    ///
    /// The first raise lands in year 1, so year 1 salary is already one
    /// increase above the offer's salary.
    pub fn advance_year(&mut self, salary_increase_rate: f64) {
        self.year += 1;
        self.salary *= 1.0 + salary_increase_rate / 100.0;
    }
}
