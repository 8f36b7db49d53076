#![forbid(unsafe_code)]
//! Record types shared by the surveillance API and dashboard.
//!
//! Every record serializes with the camelCase field names the single-page app
//! consumes, and every enumeration serializes as its display label.

mod adverse_event;
mod case;
mod catalog;
mod drug_safety;
mod labels;
mod workflow;

pub use adverse_event::AdverseEvent;
pub use case::CaseDetail;
pub use catalog::{DashboardDescriptor, Site};
pub use drug_safety::{AdverseEventTally, DrugSafetyRow};
pub use labels::{EventStatus, RiskLevel, Severity, WorkflowStage};
pub use workflow::WorkflowStatus;

pub const CRATE_NAME: &str = "pmsafety-model";
