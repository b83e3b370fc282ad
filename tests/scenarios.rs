//! The concrete scenarios enumerated in SPEC_FULL.md's testable-properties
//! section, run as `rstest` cases against the planner directly (below the
//! HTTP layer exercised in `tests/productionplan.rs`).

use dispatch_planner::domain::{Fuels, Plant, PlantKind, PowerGrid};
use dispatch_planner::planner;
use rstest::rstest;

fn fuels(gas: f64, kerosine: f64, co2: f64, wind_pct: f64) -> Fuels {
    Fuels {
        gas,
        kerosine,
        co2,
        wind_pct,
    }
}

fn gas(name: &str, efficiency: f64, pmin: f64, pmax: f64) -> Plant {
    Plant {
        name: name.to_string(),
        kind: PlantKind::Gas,
        efficiency,
        pmin,
        pmax,
    }
}

fn turbojet(name: &str, efficiency: f64, pmin: f64, pmax: f64) -> Plant {
    Plant {
        name: name.to_string(),
        kind: PlantKind::Turbojet,
        efficiency,
        pmin,
        pmax,
    }
}

fn wind(name: &str, pmin: f64, pmax: f64) -> Plant {
    Plant {
        name: name.to_string(),
        kind: PlantKind::Wind,
        efficiency: 1.0,
        pmin,
        pmax,
    }
}

/// What a scenario asserts about the planner's output.
enum Expected {
    /// The spec leaves the exact split ambiguous (ties between equal-cost
    /// plants); only check that a feasible allocation summing to `load`
    /// exists.
    FeasibleOnly,
    /// Exact per-plant output, in MW.
    Exact(&'static [(&'static str, f64)]),
    Infeasible,
}

#[rstest]
#[case::basic_mixed_two_gas_units(
    910.0,
    fuels(13.4, 50.8, 20.0, 60.0),
    vec![
        gas("gas1", 0.53, 100.0, 460.0),
        gas("gas2", 0.53, 100.0, 460.0),
        wind("wind1", 0.0, 100.0),
    ],
    Expected::FeasibleOnly,
)]
#[case::high_wind(
    500.0,
    fuels(13.4, 50.8, 20.0, 100.0),
    vec![gas("gas1", 0.53, 100.0, 460.0), wind("wind1", 0.0, 300.0)],
    Expected::Exact(&[("wind1", 300.0), ("gas1", 200.0)]),
)]
#[case::no_wind_prefers_gas_over_turbojet(
    300.0,
    fuels(13.4, 50.8, 20.0, 0.0),
    vec![
        gas("gas1", 0.53, 100.0, 460.0),
        turbojet("turbojet1", 0.3, 0.0, 200.0),
    ],
    Expected::Exact(&[("gas1", 300.0), ("turbojet1", 0.0)]),
)]
#[case::infeasible_total_capacity_too_small(
    1000.0,
    fuels(13.4, 50.8, 20.0, 0.0),
    vec![
        gas("gas1", 0.53, 100.0, 460.0),
        turbojet("turbojet1", 0.3, 0.0, 10.0),
    ],
    Expected::Infeasible,
)]
#[case::infeasible_pmin_trap(
    50.0,
    fuels(13.4, 50.8, 20.0, 0.0),
    vec![gas("gas1", 0.53, 100.0, 460.0)],
    Expected::Infeasible,
)]
#[case::wind_exactly_meets_load(
    60.0,
    fuels(13.4, 50.8, 20.0, 60.0),
    vec![gas("gas1", 0.53, 100.0, 460.0), wind("wind1", 0.0, 100.0)],
    Expected::Exact(&[("wind1", 60.0), ("gas1", 0.0)]),
)]
fn scenario(#[case] load: f64, #[case] fuels: Fuels, #[case] plants: Vec<Plant>, #[case] expected: Expected) {
    let grid = PowerGrid { load, fuels, plants };
    let result = planner::plan(&grid);

    match expected {
        Expected::Infeasible => {
            assert!(result.is_err(), "expected infeasible, got {result:?}");
        }
        Expected::FeasibleOnly => {
            let allocations = result.expect("expected a feasible allocation");
            let total: f64 = allocations.iter().map(|a| a.p).sum();
            assert!((total - grid.load).abs() < 0.1);
        }
        Expected::Exact(expected_allocations) => {
            let allocations = result.expect("expected a feasible allocation");
            for (name, expected_p) in expected_allocations {
                let actual = allocations
                    .iter()
                    .find(|a| &a.name == name)
                    .unwrap_or_else(|| panic!("no allocation for {name}"));
                assert!(
                    (actual.p - expected_p).abs() < 1e-9,
                    "{name}: expected {expected_p}, got {}",
                    actual.p
                );
            }
        }
    }
}
