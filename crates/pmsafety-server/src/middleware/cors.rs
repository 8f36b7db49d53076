// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const ALLOWED_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";
const PREFLIGHT_MAX_AGE_SECS: &str = "600";

fn normalized_header_value(headers: &HeaderMap, key: &str, max_len: usize) -> Option<String> {
    let raw = headers.get(key)?.to_str().ok()?.trim();
    if raw.is_empty() || raw.len() > max_len {
        return None;
    }
    Some(raw.to_string())
}

fn allow_origin(headers: &mut HeaderMap, origin: &str) {
    if let Ok(v) = HeaderValue::from_str(origin) {
        headers.insert("access-control-allow-origin", v);
    }
    headers.insert(
        "access-control-allow-credentials",
        HeaderValue::from_static("true"),
    );
    headers.insert("vary", HeaderValue::from_static("Origin"));
}

/// Credentialed CORS for the configured origins. Preflights short-circuit
/// with 204; any requested header is allowed by echoing it back.
pub(crate) async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let origin = normalized_header_value(req.headers(), "origin", 256)
        .filter(|origin| state.config.allows_origin(origin));

    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        if let Some(origin) = origin {
            let requested_headers =
                normalized_header_value(req.headers(), "access-control-request-headers", 1024);
            let headers = resp.headers_mut();
            allow_origin(headers, &origin);
            headers.insert(
                "access-control-allow-methods",
                HeaderValue::from_static(ALLOWED_METHODS),
            );
            if let Some(v) = requested_headers.and_then(|h| HeaderValue::from_str(&h).ok()) {
                headers.insert("access-control-allow-headers", v);
            }
            headers.insert(
                "access-control-max-age",
                HeaderValue::from_static(PREFLIGHT_MAX_AGE_SECS),
            );
        }
        return resp;
    }

    let mut resp = next.run(req).await;
    if let Some(origin) = origin {
        allow_origin(resp.headers_mut(), &origin);
    }
    resp
}
