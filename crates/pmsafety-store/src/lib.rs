#![forbid(unsafe_code)]
//! Read-only data access for the surveillance dataset.
//!
//! Presentation code talks to [`SafetyStore`] only, so the in-process
//! [`StaticStore`] can be replaced by a real source without touching either
//! front end.

mod cases;
mod clock;
mod fixtures;

use chrono::NaiveDate;
use pmsafety_model::{
    AdverseEvent, AdverseEventTally, CaseDetail, DashboardDescriptor, DrugSafetyRow, Site,
    WorkflowStatus,
};

pub use cases::{synthesize_case, synthesize_cases, CASE_COUNT};
pub use clock::{Clock, FixedClock, SystemClock};

pub const CRATE_NAME: &str = "pmsafety-store";

pub trait SafetyStore: Send + Sync + 'static {
    fn backend_tag(&self) -> &'static str {
        "unknown"
    }

    fn workflow_status(&self) -> &[WorkflowStatus];

    fn adverse_events(&self) -> &[AdverseEvent];

    fn adverse_event(&self, id: &str) -> Option<&AdverseEvent> {
        self.adverse_events().iter().find(|event| event.id == id)
    }

    /// Case list as of `today`; report dates are derived from it.
    fn cases(&self, today: NaiveDate) -> Vec<CaseDetail>;

    fn sites(&self) -> &[Site];

    fn dashboards(&self) -> &[DashboardDescriptor];

    fn drug_safety(&self) -> &[DrugSafetyRow];

    fn top_adverse_events(&self) -> &[AdverseEventTally];
}

/// The fixed mock dataset, built once and never mutated.
#[derive(Debug, Clone)]
pub struct StaticStore {
    workflow: Vec<WorkflowStatus>,
    events: Vec<AdverseEvent>,
    sites: Vec<Site>,
    dashboards: Vec<DashboardDescriptor>,
    drug_safety: Vec<DrugSafetyRow>,
    top_events: Vec<AdverseEventTally>,
}

impl Default for StaticStore {
    fn default() -> Self {
        Self {
            workflow: fixtures::workflow_rows(),
            events: fixtures::adverse_events(),
            sites: fixtures::sites(),
            dashboards: fixtures::dashboards(),
            drug_safety: fixtures::drug_safety_rows(),
            top_events: fixtures::top_adverse_events(),
        }
    }
}

impl StaticStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the adverse-event collection, keeping everything else.
    #[must_use]
    pub fn with_adverse_events(mut self, events: Vec<AdverseEvent>) -> Self {
        self.events = events;
        self
    }

    #[must_use]
    pub fn with_workflow_status(mut self, rows: Vec<WorkflowStatus>) -> Self {
        self.workflow = rows;
        self
    }
}

impl SafetyStore for StaticStore {
    fn backend_tag(&self) -> &'static str {
        "static"
    }

    fn workflow_status(&self) -> &[WorkflowStatus] {
        &self.workflow
    }

    fn adverse_events(&self) -> &[AdverseEvent] {
        &self.events
    }

    fn cases(&self, today: NaiveDate) -> Vec<CaseDetail> {
        synthesize_cases(today)
    }

    fn sites(&self) -> &[Site] {
        &self.sites
    }

    fn dashboards(&self) -> &[DashboardDescriptor] {
        &self.dashboards
    }

    fn drug_safety(&self) -> &[DrugSafetyRow] {
        &self.drug_safety
    }

    fn top_adverse_events(&self) -> &[AdverseEventTally] {
        &self.top_events
    }
}
