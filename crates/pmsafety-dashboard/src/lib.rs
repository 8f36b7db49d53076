#![forbid(unsafe_code)]
//! Server-rendered dashboard over the shared surveillance dataset.
//!
//! Navigation is path based: `/overview`, `/drug-safety`, `/adverse-events`
//! and `/aibi-dashboards`; anything else renders the overview. The AI/BI page
//! takes its selection from the `dashboard` query parameter, which the page's
//! selector submits on change.

mod html;
mod pages;
mod router;
mod selection;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use pmsafety_store::SafetyStore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub use html::{escape_html, group_thousands};
pub use pages::render_page;
pub use router::Page;
pub use selection::{AibiPane, DashboardSelection};

pub const CRATE_NAME: &str = "pmsafety-dashboard";
pub const PAGE_TITLE: &str = "Adverse Events Registry - Postmarket Safety Surveillance";

#[derive(Clone)]
pub struct DashboardState {
    pub store: Arc<dyn SafetyStore>,
}

impl DashboardState {
    #[must_use]
    pub fn new(store: Arc<dyn SafetyStore>) -> Self {
        Self { store }
    }
}

pub fn build_dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .fallback(page_handler)
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn page_handler(
    State(state): State<DashboardState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let page = Page::from_path(uri.path());
    let selected = params.get("dashboard").map(String::as_str);
    debug!(path = %uri.path(), page = page.id(), "render dashboard page");
    let html = render_page(state.store.as_ref(), page, selected);
    let mut resp = Response::new(Body::from(html));
    *resp.status_mut() = StatusCode::OK;
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    resp
}
