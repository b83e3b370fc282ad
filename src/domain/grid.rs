use super::plant::Plant;

/// Fixed fuel-price record. Field names are internal; the wire mapping
/// (`gas(euro/MWh)`, `kerosine(euro/MWh)`, `co2(euro/ton)`, `wind(%)`) lives
/// entirely in `api::productionplan`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fuels {
    pub gas: f64,
    pub kerosine: f64,
    pub co2: f64,
    pub wind_pct: f64,
}

/// A single planning request: a target load, the fuel-price vector, and the
/// fleet of plants available to meet it.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerGrid {
    pub load: f64,
    pub fuels: Fuels,
    pub plants: Vec<Plant>,
}
