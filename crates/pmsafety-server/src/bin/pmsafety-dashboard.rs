#![forbid(unsafe_code)]

use pmsafety_dashboard::{build_dashboard_router, DashboardState};
use pmsafety_server::{
    init_tracing, wait_for_shutdown_signal, with_request_tracing, RequestIds, ServerConfig,
};
use pmsafety_store::StaticStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|e| e.to_string())?;
    init_tracing(config.log_json);

    let bind_addr = config.bind_addr();
    let drain_ms = config.shutdown_drain_ms;
    let app = with_request_tracing(
        build_dashboard_router(DashboardState::new(Arc::new(StaticStore::new()))),
        RequestIds::default(),
    );
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!(
        environment = %config.environment,
        "pmsafety-dashboard listening on {bind_addr}"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!(drain_ms, "shutdown requested");
            tokio::time::sleep(Duration::from_millis(drain_ms)).await;
        })
        .await
        .map_err(|e| format!("dashboard failed: {e}"))
}
