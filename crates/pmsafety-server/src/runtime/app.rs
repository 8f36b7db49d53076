// SPDX-License-Identifier: Apache-2.0

use crate::config::ServerConfig;
use crate::http;
use crate::middleware::cors::cors_middleware;
use crate::http::request_tracing::RequestIds;
use crate::middleware::request_tracing::with_request_tracing;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use pmsafety_query::QueryLimits;
use pmsafety_store::{Clock, SafetyStore, StaticStore, SystemClock};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SafetyStore>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<ServerConfig>,
    pub limits: QueryLimits,
    pub(crate) request_ids: RequestIds,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(StaticStore::new()))
    }
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn SafetyStore>) -> Self {
        Self::with_config(store, Arc::new(SystemClock), ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(
        store: Arc<dyn SafetyStore>,
        clock: Arc<dyn Clock>,
        config: ServerConfig,
    ) -> Self {
        Self {
            store,
            clock,
            config: Arc::new(config),
            limits: QueryLimits::default(),
            request_ids: RequestIds::default(),
        }
    }

    /// The SPA routes exist only when the static directory is present at
    /// router construction time.
    #[must_use]
    pub fn spa_enabled(&self) -> bool {
        self.config.static_dir.is_dir()
    }
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/api/health", get(http::handlers::health_handler))
        .route(
            "/api/workflow-status",
            get(http::handlers::workflow_status_handler),
        )
        .route(
            "/api/adverse-events",
            get(http::handlers::adverse_events_handler),
        )
        .route(
            "/api/adverse-events/:event_id",
            get(http::handlers::adverse_event_handler),
        )
        .route("/api/cases", get(http::handlers::cases_handler))
        .route(
            "/api/dashboard/summary",
            get(http::handlers::dashboard_summary_handler),
        )
        .route(
            "/api/dashboard/kpis",
            get(http::handlers::dashboard_kpis_handler),
        )
        .route("/api/sites", get(http::handlers::sites_handler))
        .route("/api/openapi.json", get(http::handlers::openapi_handler));

    let router = if state.spa_enabled() {
        router
            .route("/assets/*path", get(http::spa::asset_handler))
            .fallback(http::spa::spa_index_handler)
    } else {
        router.fallback(http::handlers::not_found_handler)
    };

    let router = router.layer(from_fn_with_state(state.clone(), cors_middleware));
    with_request_tracing(router, state.request_ids.clone()).with_state(state)
}
