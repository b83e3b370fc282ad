pub mod breakpoints;
pub mod capacity;
pub mod dispatch;
pub mod error;
pub mod pricing;

pub use capacity::{PricedPlant, GRANULE_MW};
pub use dispatch::plan;
pub use error::PlannerError;
pub use pricing::unit_cost;
