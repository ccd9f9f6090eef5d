//! Exercise cost of vested units across ordered equity packages
//!
//! Vested units are assigned to packages in list order. Units landing in an
//! option package (ISO/NSO) cost the strike price each; RSU units cost
//! nothing. Reordering the packages changes which units count as vested
//! first, so the order is part of the offer's state.

use serde::{Deserialize, Serialize};

use crate::offer::{EquityPackage, EquityPackages, UnitType};

/// Vested units assigned to one package
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageAllocation {
    pub unit_type: UnitType,
    pub allocated_units: f64,
}

/// Assign `vested_units` to packages in order until they run out
pub fn allocate(packages: &[EquityPackage], vested_units: f64) -> Vec<PackageAllocation> {
    let mut allocations = Vec::with_capacity(packages.len());
    let mut remaining = vested_units;

    for package in packages {
        if remaining <= 0.0 {
            break;
        }
        let allocated = (package.units as f64).min(remaining);
        allocations.push(PackageAllocation {
            unit_type: package.unit_type,
            allocated_units: allocated,
        });
        remaining -= allocated;
    }

    allocations
}

/// Cost (dollars) of exercising `vested_units` at `strike_price` per unit
///
/// With no package breakdown every vested unit is treated as an option.
pub fn exercise_cost(packages: &EquityPackages, vested_units: f64, strike_price: f64) -> f64 {
    // f64::min would swallow a NaN count into a full package
    if vested_units.is_nan() {
        return f64::NAN;
    }

    // fold from +0.0; an empty f64 sum is -0.0
    match packages.breakdown() {
        None => vested_units * strike_price,
        Some(list) => allocate(list, vested_units)
            .iter()
            .filter(|a| a.unit_type.is_option())
            .fold(0.0, |acc, a| acc + a.allocated_units * strike_price),
    }
}

/// Cost (dollars) of exercising every option unit in the grant
pub fn full_grant_exercise_cost(packages: &EquityPackages, total_units: u64, strike_price: f64) -> f64 {
    match packages.breakdown() {
        None => total_units as f64 * strike_price,
        Some(list) => list
            .iter()
            .filter(|p| p.unit_type.is_option())
            .fold(0.0, |acc, p| acc + p.units as f64 * strike_price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn listed(packages: &[(u64, UnitType)]) -> EquityPackages {
        EquityPackages::Listed(packages.iter().map(|&(u, t)| EquityPackage::new(u, t)).collect())
    }

    #[test]
    fn test_all_rsu_costs_nothing() {
        let packages = listed(&[(5_000, UnitType::Rsu), (10_000, UnitType::Rsu)]);
        for vested in [0.0, 1.0, 4_999.5, 15_000.0, 1e9] {
            let cost = exercise_cost(&packages, vested, 2.10);
            assert_eq!(cost, 0.0);
            assert!(cost.is_sign_positive());
        }
        assert!(full_grant_exercise_cost(&packages, 15_000, 2.10).is_sign_positive());
    }

    #[test]
    fn test_empty_listed_falls_back_to_every_unit() {
        let empty = EquityPackages::Listed(vec![]);
        assert_relative_eq!(exercise_cost(&empty, 5_000.0, 2.10), 10_500.0, max_relative = 1e-12);
        assert_relative_eq!(full_grant_exercise_cost(&empty, 20_000, 2.10), 42_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_single_option_package() {
        let packages = listed(&[(20_000, UnitType::Iso)]);
        assert_relative_eq!(exercise_cost(&packages, 5_000.0, 2.10), 10_500.0, max_relative = 1e-12);
        assert_relative_eq!(exercise_cost(&packages, 20_000.0, 2.10), 42_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_order_determines_cost() {
        let rsu_first = listed(&[(10_000, UnitType::Rsu), (10_000, UnitType::Nso)]);
        let nso_first = listed(&[(10_000, UnitType::Nso), (10_000, UnitType::Rsu)]);

        assert_eq!(exercise_cost(&rsu_first, 10_000.0, 1.0), 0.0);
        assert_eq!(exercise_cost(&nso_first, 10_000.0, 1.0), 10_000.0);

        // Both orders agree once everything is vested
        assert_eq!(exercise_cost(&rsu_first, 20_000.0, 1.0), 10_000.0);
        assert_eq!(exercise_cost(&nso_first, 20_000.0, 1.0), 10_000.0);
    }

    #[test]
    fn test_allocation_never_exceeds_vested() {
        let packages = [
            EquityPackage::new(3_000, UnitType::Iso),
            EquityPackage::new(1_000, UnitType::Rsu),
            EquityPackage::new(6_000, UnitType::Nso),
        ];
        let mut reversed = packages;
        reversed.reverse();

        for vested in [0.0, 500.0, 3_000.0, 3_500.5, 9_999.0, 10_000.0, 25_000.0] {
            for order in [&packages[..], &reversed[..]] {
                let total: f64 = allocate(order, vested).iter().map(|a| a.allocated_units).sum();
                assert!(total <= vested);
                assert!(total <= 10_000.0);
            }
        }
    }

    #[test]
    fn test_cost_monotonic_in_vested_units() {
        let packages = listed(&[(2_000, UnitType::Rsu), (3_000, UnitType::Iso), (1_000, UnitType::Rsu)]);
        let mut previous = 0.0;
        for step in 0..=80 {
            let cost = exercise_cost(&packages, step as f64 * 100.0, 0.75);
            assert!(cost >= previous);
            previous = cost;
        }
    }

    #[test]
    fn test_unspecified_prices_every_vested_unit() {
        assert_relative_eq!(exercise_cost(&EquityPackages::Unspecified, 5_000.0, 2.10), 10_500.0, max_relative = 1e-12);
        assert!(exercise_cost(&EquityPackages::Unspecified, f64::NAN, 2.10).is_nan());
    }

    #[test]
    fn test_full_grant_cost() {
        let packages = listed(&[(15_000, UnitType::Iso), (5_000, UnitType::Rsu)]);
        assert_relative_eq!(full_grant_exercise_cost(&packages, 20_000, 2.0), 30_000.0, max_relative = 1e-12);
        assert_relative_eq!(full_grant_exercise_cost(&EquityPackages::Unspecified, 20_000, 2.0), 40_000.0, max_relative = 1e-12);
    }
}
