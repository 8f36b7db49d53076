#![forbid(unsafe_code)]

use chrono::NaiveDate;
use pmsafety_model::{AdverseEvent, CaseDetail, WorkflowStatus};
use pmsafety_store::SafetyStore;

mod aggregate;
mod filters;
mod limits;
mod query_error;

pub use aggregate::{
    adverse_event_counts, dashboard_kpis, dashboard_summary, workflow_totals, AdverseEventCounts,
    DashboardKpis, DashboardSummary, WorkflowTotals, HIGH_RISK_DRUGS_PLACEHOLDER,
    TOTAL_DRUGS_PLACEHOLDER,
};
pub use filters::{
    AdverseEventFilter, AdverseEventQuery, CaseFilter, CaseQuery, WorkflowFilter,
    ALL_SITES_SENTINEL,
};
pub use limits::{QueryLimits, ResultLimit};
pub use query_error::{QueryError, QueryErrorCode};

pub const CRATE_NAME: &str = "pmsafety-query";

/// Keeps rows matching `keep`, in source order, then cuts the result at
/// `limit`.
pub fn select<'a, T, I, F>(rows: I, keep: F, limit: Option<ResultLimit>) -> Vec<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> bool,
{
    let mut matching: Vec<T> = rows.into_iter().filter(|row| keep(*row)).cloned().collect();
    if let Some(limit) = limit {
        matching.truncate(limit.keep(matching.len()));
    }
    matching
}

#[must_use]
pub fn query_workflow_status<S>(store: &S, filter: &WorkflowFilter) -> Vec<WorkflowStatus>
where
    S: SafetyStore + ?Sized,
{
    select(store.workflow_status(), |row| filter.matches(row), None)
}

#[must_use]
pub fn query_adverse_events<S>(store: &S, req: &AdverseEventQuery) -> Vec<AdverseEvent>
where
    S: SafetyStore + ?Sized,
{
    select(
        store.adverse_events(),
        |event| req.filter.matches(event),
        Some(req.limit),
    )
}

pub fn find_adverse_event<S>(store: &S, id: &str) -> Result<AdverseEvent, QueryError>
where
    S: SafetyStore + ?Sized,
{
    store
        .adverse_event(id)
        .cloned()
        .ok_or_else(|| QueryError::not_found("adverse event", id))
}

#[must_use]
pub fn query_cases<S>(store: &S, req: &CaseQuery, today: NaiveDate) -> Vec<CaseDetail>
where
    S: SafetyStore + ?Sized,
{
    let cases = store.cases(today);
    select(&cases, |case| req.filter.matches(case), Some(req.limit))
}
