// SPDX-License-Identifier: Apache-2.0

use axum::http::HeaderMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const MAX_REQUEST_ID_BYTES: usize = 128;

/// Sequence behind generated `req-<hex>` ids, shared by clones.
#[derive(Clone, Debug)]
pub struct RequestIds(Arc<AtomicU64>);

impl Default for RequestIds {
    fn default() -> Self {
        Self(Arc::new(AtomicU64::new(1)))
    }
}

impl RequestIds {
    fn next_id(&self) -> String {
        let id = self.0.fetch_add(1, Ordering::Relaxed);
        format!("req-{id:016x}")
    }
}

/// Inbound `x-request-id` when usable, otherwise a fresh `req-<hex>` id.
#[must_use]
pub(crate) fn request_id(headers: &HeaderMap, ids: &RequestIds) -> String {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_BYTES)
        .map(ToString::to_string)
        .unwrap_or_else(|| ids.next_id())
}
