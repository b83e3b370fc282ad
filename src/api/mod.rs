pub mod error;
pub mod health;
pub mod productionplan;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;

pub fn router(cfg: &AppConfig) -> Router {
    let cors = if cfg.server.enable_cors {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .merge(productionplan::router())
        .merge(health::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
