use anyhow::Result;
use dispatch_planner::{api, config::AppConfig, telemetry};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let cfg = AppConfig::load()?;
    let app = api::router(&cfg);

    let addr = cfg.server.socket_addr()?;
    info!(%addr, "starting dispatch planner");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
