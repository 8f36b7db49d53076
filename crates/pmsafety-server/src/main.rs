#![forbid(unsafe_code)]

use pmsafety_server::{
    build_router, init_tracing, wait_for_shutdown_signal, AppState, ServerConfig,
};
use pmsafety_store::{StaticStore, SystemClock};
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
    let state = AppState::with_config(
        Arc::new(StaticStore::new()),
        Arc::new(SystemClock),
        config,
    );
    info!(
        environment = %state.config.environment,
        backend = state.store.backend_tag(),
        spa = state.spa_enabled(),
        static_dir = %state.config.static_dir.display(),
        "starting api server"
    );
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("pmsafety-server listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!(drain_ms, "shutdown requested");
            tokio::time::sleep(Duration::from_millis(drain_ms)).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
