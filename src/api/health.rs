use axum::{response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

pub fn router() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// GET /healthz — liveness probe. The planner is a pure function with no
/// external dependencies to check, so "the process is answering" is the
/// whole health contract — unlike the teacher's `/health`, there is no
/// `checks` map of downstream component health here.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: chrono::DateTime<chrono::Utc>,
}

async fn healthz() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now(),
    })
}
