use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::error::ApiError;
use crate::domain::{Allocation, Fuels, Plant, PlantKind, PowerGrid};
use crate::planner;

pub fn router() -> Router {
    Router::new().route("/productionplan", post(handle))
}

/// Wire representation of a load/fuel/fleet request. Field names here are
/// dictated by callers and carry punctuation no Rust identifier can, hence
/// the renames; nothing outside this module ever sees them.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductionPlanRequest {
    #[validate(custom(function = "validate_strictly_positive"))]
    pub load: f64,

    #[validate(nested)]
    pub fuels: WireFuels,

    #[validate(length(min = 1))]
    #[validate(nested)]
    pub powerplants: Vec<WirePlant>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct WireFuels {
    #[serde(rename = "gas(euro/MWh)")]
    #[validate(custom(function = "validate_strictly_positive"))]
    pub gas: f64,

    #[serde(rename = "kerosine(euro/MWh)")]
    #[validate(custom(function = "validate_strictly_positive"))]
    pub kerosine: f64,

    #[serde(rename = "co2(euro/ton)")]
    #[validate(custom(function = "validate_strictly_positive"))]
    pub co2: f64,

    #[serde(rename = "wind(%)")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub wind_pct: f64,
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_wire_plant"))]
pub struct WirePlant {
    #[validate(length(min = 1))]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: WirePlantKind,

    #[validate(custom(function = "validate_strictly_positive"))]
    pub efficiency: f64,

    #[validate(range(min = 0.0))]
    pub pmin: f64,

    #[validate(custom(function = "validate_strictly_positive"))]
    pub pmax: f64,
}

/// Shared rule for every wire field the spec requires to be `> 0`
/// (load, fuel prices, efficiency, pmax) — `validator`'s `range` only gives
/// an inclusive bound, so these need a custom check instead.
fn validate_strictly_positive(value: &f64) -> Result<(), validator::ValidationError> {
    if *value > 0.0 {
        Ok(())
    } else {
        Err(validator::ValidationError::new("must be strictly positive"))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WirePlantKind {
    Gasfired,
    Turbojet,
    Windturbine,
}

fn validate_wire_plant(plant: &WirePlant) -> Result<(), validator::ValidationError> {
    if plant.pmin > plant.pmax {
        return Err(validator::ValidationError::new("pmin must not exceed pmax"));
    }
    Ok(())
}

impl From<WireFuels> for Fuels {
    fn from(wire: WireFuels) -> Self {
        Fuels {
            gas: wire.gas,
            kerosine: wire.kerosine,
            co2: wire.co2,
            wind_pct: wire.wind_pct,
        }
    }
}

impl From<WirePlant> for Plant {
    fn from(wire: WirePlant) -> Self {
        let kind = match wire.kind {
            WirePlantKind::Gasfired => PlantKind::Gas,
            WirePlantKind::Turbojet => PlantKind::Turbojet,
            WirePlantKind::Windturbine => PlantKind::Wind,
        };
        Plant {
            name: wire.name,
            kind,
            efficiency: wire.efficiency,
            pmin: wire.pmin,
            pmax: wire.pmax,
        }
    }
}

impl From<ProductionPlanRequest> for PowerGrid {
    fn from(req: ProductionPlanRequest) -> Self {
        PowerGrid {
            load: req.load,
            fuels: req.fuels.into(),
            plants: req.powerplants.into_iter().map(Plant::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    pub name: String,
    pub p: f64,
}

impl From<Allocation> for AllocationResponse {
    fn from(a: Allocation) -> Self {
        Self { name: a.name, p: a.p }
    }
}

/// `POST /productionplan` — the success body is a bare JSON array, not an
/// envelope, matching this endpoint's longstanding contract.
async fn handle(
    Json(request): Json<ProductionPlanRequest>,
) -> Result<Json<Vec<AllocationResponse>>, ApiError> {
    request.validate()?;

    let grid: PowerGrid = request.into();
    let allocations = planner::plan(&grid)?;

    Ok(Json(
        allocations.into_iter().map(AllocationResponse::from).collect(),
    ))
}
