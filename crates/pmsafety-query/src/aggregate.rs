// SPDX-License-Identifier: Apache-2.0

use pmsafety_model::Severity;
use pmsafety_store::SafetyStore;
use serde::{Deserialize, Serialize};

/// Published drug count; no catalog backs it yet.
pub const TOTAL_DRUGS_PLACEHOLDER: u64 = 150;
/// Published high-risk drug count; no signal computation backs it yet.
pub const HIGH_RISK_DRUGS_PLACEHOLDER: u64 = 12;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WorkflowTotals {
    pub late: u64,
    pub over_normal: u64,
    pub normal: u64,
}

impl WorkflowTotals {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.late + self.over_normal + self.normal
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AdverseEventCounts {
    pub total: u64,
    pub severe: u64,
    pub active: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_cases: u64,
    pub late_cases: u64,
    pub over_normal_cases: u64,
    pub normal_cases: u64,
    pub total_adverse_events: u64,
    pub critical_events: u64,
    pub sites_count: u64,
    pub open_cases: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub total_cases: u64,
    pub total_drugs: u64,
    pub high_risk_drugs: u64,
    pub total_adverse_events: u64,
}

#[must_use]
pub fn workflow_totals<S: SafetyStore + ?Sized>(store: &S) -> WorkflowTotals {
    store
        .workflow_status()
        .iter()
        .fold(WorkflowTotals::default(), |acc, row| WorkflowTotals {
            late: acc.late + u64::from(row.late),
            over_normal: acc.over_normal + u64::from(row.over_normal),
            normal: acc.normal + u64::from(row.normal),
        })
}

#[must_use]
pub fn adverse_event_counts<S: SafetyStore + ?Sized>(store: &S) -> AdverseEventCounts {
    let events = store.adverse_events();
    AdverseEventCounts {
        total: events.len() as u64,
        severe: events
            .iter()
            .filter(|e| e.severity == Severity::Severe)
            .count() as u64,
        active: events.iter().filter(|e| e.status.is_active()).count() as u64,
    }
}

#[must_use]
pub fn dashboard_summary<S: SafetyStore + ?Sized>(store: &S) -> DashboardSummary {
    let totals = workflow_totals(store);
    let events = adverse_event_counts(store);
    DashboardSummary {
        total_cases: totals.total(),
        late_cases: totals.late,
        over_normal_cases: totals.over_normal,
        normal_cases: totals.normal,
        total_adverse_events: events.total,
        critical_events: events.severe,
        sites_count: store.sites().len() as u64,
        open_cases: events.active,
    }
}

#[must_use]
pub fn dashboard_kpis<S: SafetyStore + ?Sized>(store: &S) -> DashboardKpis {
    DashboardKpis {
        total_cases: workflow_totals(store).total(),
        total_drugs: TOTAL_DRUGS_PLACEHOLDER,
        high_risk_drugs: HIGH_RISK_DRUGS_PLACEHOLDER,
        total_adverse_events: adverse_event_counts(store).total,
    }
}
