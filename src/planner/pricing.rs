use crate::domain::{Fuels, Plant, PlantKind};

/// Tons of CO2 emitted per MWh of gas-fired generation. Fixed model constant;
/// turbojets are modeled as emissions-exempt and wind burns no fuel.
const GAS_CO2_INTENSITY_TONS_PER_MWH: f64 = 0.3;

/// Marginal cost to produce one MWh from `plant`, in euros.
///
/// Wind is always free. A plant with `efficiency == 0` prices at
/// `f64::INFINITY` rather than panicking — the wire validation layer rejects
/// such plants before they reach the planner, but the planner itself stays
/// well-defined when called directly.
pub fn unit_cost(plant: &Plant, fuels: &Fuels) -> f64 {
    match plant.kind {
        PlantKind::Wind => 0.0,
        PlantKind::Gas => fuels.gas / plant.efficiency + GAS_CO2_INTENSITY_TONS_PER_MWH * fuels.co2,
        PlantKind::Turbojet => fuels.kerosine / plant.efficiency,
    }
}
