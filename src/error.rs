//! Error types for the loading, storage and lookup boundaries
//!
//! The projection arithmetic itself never fails; these errors come from
//! reading inputs, looking up stored offers, and selecting an exit year.

use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, ProjectionError>;

#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Equity package type other than iso, nso or rsu
    #[error("unknown equity unit type '{value}'")]
    UnknownUnitType { value: String },

    /// No stored offer with this id
    #[error("offer {id} not found")]
    OfferNotFound { id: u64 },

    /// Requested exit year outside the projected range
    #[error("exit year {year} is outside the projected range 1..={max}")]
    ExitYearOutOfRange { year: u32, max: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProjectionError::UnknownUnitType { value: "warrant".to_string() };
        assert_eq!(err.to_string(), "unknown equity unit type 'warrant'");

        let err = ProjectionError::ExitYearOutOfRange { year: 12, max: 10 };
        assert_eq!(err.to_string(), "exit year 12 is outside the projected range 1..=10");

        let err = ProjectionError::OfferNotFound { id: 7 };
        assert_eq!(err.to_string(), "offer 7 not found");
    }
}
