//! Layered forward DP over plants in merit order.
//!
//! The frontier is a sparse map from reachable cumulative production
//! (granules) to the minimum cost to reach it, because `LOAD` can run to
//! tens of thousands of granules while the number of levels any plant
//! combination can actually reach stays small. A `BTreeMap` also gives
//! deterministic iteration order, which the tie-breaking rule below relies
//! on.
//!
//! The plant ordering is fixed once, up front, by ascending unit cost. This
//! does not formally guarantee optimality for arbitrary pmin configurations
//! — a cheaper plant's pmin obligation can occasionally force a more
//! expensive plant into service where reconsidering the order might not —
//! but it matches this system's documented contract and the breakpoint set
//! in [`crate::planner::breakpoints`] is specifically designed to mitigate
//! the cases where it would otherwise go wrong.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::domain::{Allocation, PowerGrid};
use crate::planner::breakpoints::significant_stopping_points;
use crate::planner::capacity::{resolve, PricedPlant, GRANULE_MW};
use crate::planner::error::PlannerError;
use crate::planner::pricing::unit_cost;

/// Plan the minimum-cost allocation that exactly meets `grid.load`.
///
/// Returns one [`Allocation`] per plant, ordered cheapest-first (merit
/// order) rather than the caller's input order — this implementation's
/// documented choice where the original contract left it unspecified.
pub fn plan(grid: &PowerGrid) -> Result<Vec<Allocation>, PlannerError> {
    if grid.plants.is_empty() {
        return Err(PlannerError::Infeasible(
            "no plants supplied".to_string(),
        ));
    }

    let load_g = (grid.load / GRANULE_MW).round() as i64;

    let mut priced: Vec<PricedPlant> = grid
        .plants
        .iter()
        .map(|p| resolve(p, &grid.fuels, unit_cost(p, &grid.fuels)))
        .collect();
    // Vec::sort_by_key is stable: ties keep the caller's input order.
    priced.sort_by_key(|p| OrderedFloat(p.unit_cost));

    let n = priced.len();
    let pmins_g: Vec<i64> = priced.iter().map(|p| p.pmin_g).collect();
    let stopping_steps = significant_stopping_points(&pmins_g);

    let mut frontier: BTreeMap<i64, i64> = BTreeMap::new();
    frontier.insert(0, 0);
    let mut back_pointers: Vec<BTreeMap<i64, i64>> = Vec::with_capacity(n);

    for (i, plant) in priced.iter().enumerate() {
        let (next_frontier, layer_back) = advance_layer(&frontier, plant, load_g, &stopping_steps[i]);
        frontier = next_frontier;
        back_pointers.push(layer_back);
    }

    if !frontier.contains_key(&load_g) {
        return Err(PlannerError::infeasible());
    }

    let granules = backtrack(&back_pointers, load_g);

    Ok(priced
        .iter()
        .zip(granules)
        .map(|(plant, g)| Allocation {
            name: plant.name.clone(),
            p: granules_to_mw(g),
        })
        .collect())
}

/// Extend the frontier by one plant, returning the updated frontier and this
/// layer's back-pointer map (`new cumulative production -> previous one`).
fn advance_layer(
    frontier: &BTreeMap<i64, i64>,
    plant: &PricedPlant,
    load_g: i64,
    steps: &[i64],
) -> (BTreeMap<i64, i64>, BTreeMap<i64, i64>) {
    let pmax_reachable = plant.pmax_g.min(load_g);
    let pmin = plant.pmin_g;

    let stopping_points: Vec<i64> = if pmin <= pmax_reachable {
        steps
            .iter()
            .filter(|&&step| pmax_reachable - step >= pmin)
            .map(|&step| load_g - step)
            .collect()
    } else {
        Vec::new()
    };

    // "Plant off" is always legal: the next layer starts as a copy of this one.
    let mut next_frontier = frontier.clone();
    let mut layer_back: BTreeMap<i64, i64> = frontier.keys().map(|&x| (x, x)).collect();

    for (&from, &cost_so_far) in frontier.iter() {
        for &stopping_point in &stopping_points {
            if stopping_point < from {
                continue;
            }
            let to = if from + pmax_reachable < stopping_point {
                from + pmax_reachable
            } else {
                stopping_point
            };

            let contributed_g = to - from;
            let added_cost = if contributed_g == 0 {
                0.0
            } else {
                contributed_g as f64 * plant.unit_cost
            };
            let candidate_cost = (cost_so_far as f64 + added_cost).floor() as i64;

            let improves_or_ties = next_frontier
                .get(&to)
                .map(|&existing| candidate_cost <= existing)
                .unwrap_or(true);
            if improves_or_ties {
                next_frontier.insert(to, candidate_cost);
                layer_back.insert(to, from);
            }
        }
    }

    (next_frontier, layer_back)
}

/// Walk the back-pointer layers from `load_g` back to `0`, returning each
/// plant's contribution in granules, in the same order the layers were
/// built (merit order).
fn backtrack(back_pointers: &[BTreeMap<i64, i64>], load_g: i64) -> Vec<i64> {
    let n = back_pointers.len();
    let mut granules = vec![0i64; n];
    let mut acc = load_g;
    for i in (0..n).rev() {
        let prev = back_pointers[i]
            .get(&acc)
            .copied()
            .expect("a reachable frontier state always has a recorded predecessor");
        granules[i] = acc - prev;
        acc = prev;
    }
    granules
}

fn granules_to_mw(granules: i64) -> f64 {
    let mw = granules as f64 * GRANULE_MW;
    (mw * 10.0).round() / 10.0
}
