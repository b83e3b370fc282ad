use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::planner::PlannerError;

/// API error types that can be returned from handlers.
///
/// `error_envelope` below is the one shape every non-2xx response takes,
/// matching the `{status_code, exception_case, detail}` contract this
/// service has always returned — callers parse errors the same way
/// regardless of which variant produced them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Infeasible(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    status_code: u16,
    exception_case: &'static str,
    detail: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Infeasible(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn exception_case(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "ValidationError",
            ApiError::Infeasible(_) => "UnfeasibleException",
            ApiError::Internal(_) => "InternalServerError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Internal(_) => tracing::error!(error = %self, "request failed"),
            ApiError::Infeasible(_) => tracing::info!(error = %self, "no feasible plan"),
            ApiError::Validation(_) => tracing::debug!(error = %self, "rejected request"),
        }

        let envelope = ErrorEnvelope {
            status_code: status.as_u16(),
            exception_case: self.exception_case(),
            detail: self.to_string(),
        };

        (status, Json(envelope)).into_response()
    }
}

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        match err {
            PlannerError::Infeasible(msg) => ApiError::Infeasible(msg),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_maps_to_bad_request() {
        let err = ApiError::from(PlannerError::infeasible());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.exception_case(), "UnfeasibleException");
    }

    #[test]
    fn validation_maps_to_unprocessable_entity() {
        let err = ApiError::Validation("bad field".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn internal_maps_to_server_error() {
        let err = ApiError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
