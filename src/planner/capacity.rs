use crate::domain::{Fuels, Plant, PlantKind};

/// Internal discretization unit: 0.1 MW.
pub const GRANULE_MW: f64 = 0.1;

/// A plant enriched with its merit-order price and granule-resolved capacity.
///
/// `pmax_g` already reflects wind derating. A plant whose `pmin_g > pmax_g`
/// after derating is unusable in this instance: the planner treats it as
/// able to contribute only zero, rather than rejecting the request outright
/// (the HTTP surface rejects `pmin > pmax` on the nameplate values before
/// the planner ever runs; derating can still squeeze a usable plant shut).
#[derive(Debug, Clone)]
pub struct PricedPlant {
    pub name: String,
    pub unit_cost: f64,
    pub pmin_g: i64,
    pub pmax_g: i64,
}

/// Resolve a plant's effective capacity into granules, applying wind
/// derating: `pmax_effective = plant.pmax * wind_pct / 100` for wind
/// turbines, unchanged for everything else.
pub fn resolve(plant: &Plant, fuels: &Fuels, unit_cost: f64) -> PricedPlant {
    let pmax_effective_mw = match plant.kind {
        PlantKind::Wind => plant.pmax * fuels.wind_pct / 100.0,
        PlantKind::Gas | PlantKind::Turbojet => plant.pmax,
    };
    let pmin_effective_mw = plant.pmin;

    PricedPlant {
        name: plant.name.clone(),
        unit_cost,
        pmin_g: (pmin_effective_mw / GRANULE_MW).ceil() as i64,
        pmax_g: (pmax_effective_mw / GRANULE_MW).floor() as i64,
    }
}
