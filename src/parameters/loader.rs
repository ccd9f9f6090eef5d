//! CSV-based scenario grid loader
//!
//! Each row is one parameter set. Blank cells fall back to the defaults.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::ProjectionParameters;
use crate::error::Result;
use crate::money::Cents;

/// Raw CSV row of a scenario grid
#[derive(Debug, Deserialize)]
struct CsvRow {
    annual_growth_rate: Option<f64>,
    exit_year: Option<u32>,
    salary_increase_rate: Option<f64>,
    bonus_rate: Option<f64>,
    equity_refresh_rate: Option<f64>,
    current_valuation_cents: Option<i64>,
}

impl CsvRow {
    fn to_parameters(self, base: &ProjectionParameters) -> ProjectionParameters {
        ProjectionParameters {
            annual_growth_rate: self.annual_growth_rate.unwrap_or(base.annual_growth_rate),
            exit_year: self.exit_year.unwrap_or(base.exit_year),
            salary_increase_rate: self.salary_increase_rate.unwrap_or(base.salary_increase_rate),
            bonus_rate: self.bonus_rate.unwrap_or(base.bonus_rate),
            equity_refresh_rate: self.equity_refresh_rate.unwrap_or(base.equity_refresh_rate),
            current_valuation: self.current_valuation_cents.map(Cents).or(base.current_valuation),
        }
    }
}

/// Load a scenario grid from any reader; blank cells take values from `base`
pub fn load_parameter_grid_from_reader<R: Read>(
    reader: R,
    base: &ProjectionParameters,
) -> Result<Vec<ProjectionParameters>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut grid = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        grid.push(row.to_parameters(base));
    }

    Ok(grid)
}

/// Load a scenario grid from a CSV file
pub fn load_parameter_grid<P: AsRef<Path>>(path: P, base: &ProjectionParameters) -> Result<Vec<ProjectionParameters>> {
    let file = File::open(path)?;
    load_parameter_grid_from_reader(file, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_grid() {
        let data = "\
annual_growth_rate,exit_year,salary_increase_rate,bonus_rate,equity_refresh_rate,current_valuation_cents
10,3,2,5,0,
50,,,,,100000000000
";
        let base = ProjectionParameters::default();
        let grid = load_parameter_grid_from_reader(data.as_bytes(), &base).expect("grid parses");
        assert_eq!(grid.len(), 2);

        assert_eq!(grid[0].annual_growth_rate, 10.0);
        assert_eq!(grid[0].exit_year, 3);
        assert_eq!(grid[0].equity_refresh_rate, 0.0);
        assert_eq!(grid[0].current_valuation, None);

        assert_eq!(grid[1].annual_growth_rate, 50.0);
        assert_eq!(grid[1].exit_year, base.exit_year);
        assert_eq!(grid[1].bonus_rate, base.bonus_rate);
        assert_eq!(grid[1].current_valuation, Some(Cents(100_000_000_000)));
    }

    #[test]
    fn test_bad_cell_is_an_error() {
        let data = "annual_growth_rate,exit_year\nfast,3\n";
        let result = load_parameter_grid_from_reader(data.as_bytes(), &ProjectionParameters::default());
        assert!(result.is_err());
    }
}
