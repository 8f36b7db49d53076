#![forbid(unsafe_code)]
//! HTTP front ends for the surveillance dataset.
//!
//! [`build_router`] serves the JSON API under `/api` and, when a built
//! frontend is present in the configured static directory, the single-page
//! app around it. The server-rendered dashboard lives in
//! `pmsafety-dashboard`; both binaries here share config and tracing setup.

pub mod config;
mod http;
mod middleware;
mod runtime;
pub mod telemetry;

pub use config::{ConfigError, ServerConfig};
pub use http::request_tracing::RequestIds;
pub use middleware::request_tracing::with_request_tracing;
pub use runtime::app::{build_router, AppState};
pub use telemetry::{init_tracing, wait_for_shutdown_signal};

pub const CRATE_NAME: &str = "pmsafety-server";
