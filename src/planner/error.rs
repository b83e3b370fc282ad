use thiserror::Error;

/// The one error the planner itself can raise.
///
/// Input shape problems (malformed JSON, out-of-range fields) are the
/// caller's responsibility and never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("{0}")]
    Infeasible(String),
}

impl PlannerError {
    pub fn infeasible() -> Self {
        Self::Infeasible("No feasible solution for the requested load.".to_string())
    }
}
