use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pmsafety_api::error_mapping::map_error;
use pmsafety_api::{
    openapi_spec, parse_adverse_event_params_with_limits, parse_case_params_with_limits,
    parse_workflow_params, ApiError, HealthDto,
};
use pmsafety_query::{
    dashboard_kpis, dashboard_summary, find_adverse_event, query_adverse_events, query_cases,
    query_workflow_status,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub(crate) fn api_error_response(err: &ApiError) -> Response {
    let status = StatusCode::from_u16(map_error(err).status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.to_body())).into_response()
}

pub(crate) async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthDto::healthy(&state.config.environment))
}

pub(crate) async fn workflow_status_handler(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let filter = parse_workflow_params(&params);
    let rows = query_workflow_status(state.store.as_ref(), &filter);
    debug!(rows = rows.len(), "workflow status query");
    Json(rows).into_response()
}

pub(crate) async fn adverse_events_handler(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let req = match parse_adverse_event_params_with_limits(&params, &state.limits) {
        Ok(req) => req,
        Err(err) => {
            warn!(error = %err, "rejected adverse event query");
            return api_error_response(&err);
        }
    };
    let rows = query_adverse_events(state.store.as_ref(), &req);
    debug!(rows = rows.len(), limit = ?req.limit, "adverse event query");
    Json(rows).into_response()
}

pub(crate) async fn adverse_event_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Response {
    match find_adverse_event(state.store.as_ref(), &event_id) {
        Ok(event) => Json(event).into_response(),
        Err(err) => {
            debug!(error = %err, "adverse event lookup failed");
            api_error_response(&ApiError::from(err))
        }
    }
}

pub(crate) async fn cases_handler(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let req = match parse_case_params_with_limits(&params, &state.limits) {
        Ok(req) => req,
        Err(err) => {
            warn!(error = %err, "rejected case query");
            return api_error_response(&err);
        }
    };
    let rows = query_cases(state.store.as_ref(), &req, state.clock.today());
    debug!(rows = rows.len(), limit = ?req.limit, "case query");
    Json(rows).into_response()
}

pub(crate) async fn dashboard_summary_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(dashboard_summary(state.store.as_ref()))
}

pub(crate) async fn dashboard_kpis_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(dashboard_kpis(state.store.as_ref()))
}

pub(crate) async fn sites_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.sites().to_vec())
}

pub(crate) async fn openapi_handler() -> impl IntoResponse {
    Json(openapi_spec())
}

pub(crate) async fn not_found_handler() -> Response {
    api_error_response(&ApiError::not_found("Not Found"))
}
