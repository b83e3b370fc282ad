use serde::{Deserialize, Serialize};

/// The three plant technologies this fleet can contain.
///
/// A closed variant, not a string: dispatch over kind is a pattern match,
/// never an attribute lookup keyed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantKind {
    Gas,
    Turbojet,
    Wind,
}

/// A single plant in the fleet, in the planner's internal representation.
///
/// `pmin`/`pmax` are nameplate MW values, before wind derating. The planner
/// never mutates a `Plant`; capacity resolution produces a separate
/// [`crate::planner::capacity::PricedPlant`] alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Plant {
    pub name: String,
    pub kind: PlantKind,
    pub efficiency: f64,
    pub pmin: f64,
    pub pmax: f64,
}
