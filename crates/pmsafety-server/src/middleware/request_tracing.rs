// SPDX-License-Identifier: Apache-2.0

use crate::http::request_tracing::{request_id, RequestIds};
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::Response;
use axum::Router;
use std::time::Instant;
use tracing::Instrument;

pub(crate) async fn request_tracing_middleware(
    State(ids): State<RequestIds>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let route = request.uri().path().to_string();
    let request_id = request_id(request.headers(), &ids);

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %method,
        route = %route,
    );

    let started = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
    });
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

/// Wraps any router in the `http.request` span and `x-request-id` header.
pub fn with_request_tracing<S>(router: Router<S>, ids: RequestIds) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(from_fn_with_state(ids, request_tracing_middleware))
}
