pub mod grid;
pub mod plant;

pub use grid::{Fuels, PowerGrid};
pub use plant::{Plant, PlantKind};

/// One plant's share of the requested load, in MW.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Allocation {
    pub name: String,
    pub p: f64,
}
