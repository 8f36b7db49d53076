use crate::errors::ApiError;
use pmsafety_query::{
    AdverseEventFilter, AdverseEventQuery, CaseFilter, CaseQuery, QueryLimits, ResultLimit,
    WorkflowFilter,
};
use std::collections::BTreeMap;

pub fn parse_workflow_params(query: &BTreeMap<String, String>) -> WorkflowFilter {
    WorkflowFilter {
        site: query.get("site").cloned(),
        stage: query.get("stage").cloned(),
    }
}

pub fn parse_adverse_event_params(
    query: &BTreeMap<String, String>,
) -> Result<AdverseEventQuery, ApiError> {
    parse_adverse_event_params_with_limits(query, &QueryLimits::default())
}

pub fn parse_adverse_event_params_with_limits(
    query: &BTreeMap<String, String>,
    limits: &QueryLimits,
) -> Result<AdverseEventQuery, ApiError> {
    Ok(AdverseEventQuery {
        filter: AdverseEventFilter {
            site: query.get("site").cloned(),
            severity: query.get("severity").cloned(),
            status: query.get("status").cloned(),
        },
        limit: parse_limit(query, limits.adverse_event_limit)?,
    })
}

pub fn parse_case_params(query: &BTreeMap<String, String>) -> Result<CaseQuery, ApiError> {
    parse_case_params_with_limits(query, &QueryLimits::default())
}

pub fn parse_case_params_with_limits(
    query: &BTreeMap<String, String>,
    limits: &QueryLimits,
) -> Result<CaseQuery, ApiError> {
    Ok(CaseQuery {
        filter: CaseFilter {
            site: query.get("site").cloned(),
            status: query.get("status").cloned(),
            workflow_stage: query.get("workflow_stage").cloned(),
        },
        limit: parse_limit(query, limits.case_limit)?,
    })
}

/// `limit` is only coerced to an integer; anything else is rejected.
/// Integers beyond the `i64` range saturate instead of failing.
fn parse_limit(
    query: &BTreeMap<String, String>,
    default_limit: usize,
) -> Result<ResultLimit, ApiError> {
    let Some(raw) = query.get("limit") else {
        return Ok(ResultLimit::First(default_limit));
    };
    parse_saturating_i64(raw.trim())
        .map(ResultLimit::from_signed)
        .ok_or_else(|| ApiError::invalid_param("limit", raw))
}

fn parse_saturating_i64(raw: &str) -> Option<i64> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = match digits.parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(value)
}
