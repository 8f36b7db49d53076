// SPDX-License-Identifier: Apache-2.0

use crate::http::handlers::api_error_response;
use crate::AppState;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::response::Response;
use pmsafety_api::ApiError;
use std::path::{Component, PathBuf};
use tracing::debug;

/// Relative asset path under `assets/`, or `None` if it could escape it.
pub(crate) fn asset_relative_path(raw: &str) -> Option<PathBuf> {
    let path = std::path::Path::new(raw);
    if raw.is_empty() || !path.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(path.to_path_buf())
}

#[must_use]
pub(crate) fn content_type_for(path: &std::path::Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("html") => "text/html; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json" | "map") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn file_response(bytes: Vec<u8>, content_type: &'static str) -> Response {
    let mut resp = Response::new(Body::from(bytes));
    *resp.status_mut() = StatusCode::OK;
    resp.headers_mut()
        .insert("content-type", HeaderValue::from_static(content_type));
    resp
}

fn spa_not_found() -> Response {
    api_error_response(&ApiError::not_found("Not found"))
}

pub(crate) async fn asset_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Response {
    let Some(relative) = asset_relative_path(&path) else {
        debug!(path = %path, "rejected asset path");
        return spa_not_found();
    };
    let full = state.config.static_dir.join("assets").join(&relative);
    match tokio::fs::read(&full).await {
        Ok(bytes) => file_response(bytes, content_type_for(&full)),
        Err(_) => spa_not_found(),
    }
}

/// Every path no API route claims gets `index.html`.
pub(crate) async fn spa_index_handler(State(state): State<AppState>, uri: Uri) -> Response {
    debug!(path = %uri.path(), "serving spa index");
    let index = state.config.static_dir.join("index.html");
    match tokio::fs::read(&index).await {
        Ok(bytes) => file_response(bytes, "text/html; charset=utf-8"),
        Err(_) => spa_not_found(),
    }
}
