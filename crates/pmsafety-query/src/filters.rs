// SPDX-License-Identifier: Apache-2.0

use crate::{QueryLimits, ResultLimit};
use pmsafety_model::{AdverseEvent, CaseDetail, WorkflowStatus};
use serde::{Deserialize, Serialize};

/// Site value meaning "every site" on the workflow-status view.
pub const ALL_SITES_SENTINEL: &str = "<All>";

// An empty value constrains nothing, same as an absent one.
fn constraint(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn admits(constraint: Option<&str>, actual: &str) -> bool {
    constraint.is_none_or(|expected| expected == actual)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WorkflowFilter {
    pub site: Option<String>,
    pub stage: Option<String>,
}

impl WorkflowFilter {
    #[must_use]
    pub fn matches(&self, row: &WorkflowStatus) -> bool {
        let site = constraint(self.site.as_ref()).filter(|v| *v != ALL_SITES_SENTINEL);
        admits(site, &row.site) && admits(constraint(self.stage.as_ref()), row.stage.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AdverseEventFilter {
    pub site: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
}

impl AdverseEventFilter {
    #[must_use]
    pub fn matches(&self, event: &AdverseEvent) -> bool {
        admits(constraint(self.site.as_ref()), &event.site)
            && admits(constraint(self.severity.as_ref()), event.severity.as_str())
            && admits(constraint(self.status.as_ref()), event.status.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CaseFilter {
    pub site: Option<String>,
    pub status: Option<String>,
    pub workflow_stage: Option<String>,
}

impl CaseFilter {
    #[must_use]
    pub fn matches(&self, case: &CaseDetail) -> bool {
        admits(constraint(self.site.as_ref()), &case.site)
            && admits(constraint(self.status.as_ref()), case.status.as_str())
            && admits(
                constraint(self.workflow_stage.as_ref()),
                case.workflow_stage.as_str(),
            )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdverseEventQuery {
    pub filter: AdverseEventFilter,
    pub limit: ResultLimit,
}

impl Default for AdverseEventQuery {
    fn default() -> Self {
        Self {
            filter: AdverseEventFilter::default(),
            limit: ResultLimit::First(QueryLimits::default().adverse_event_limit),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseQuery {
    pub filter: CaseFilter,
    pub limit: ResultLimit,
}

impl Default for CaseQuery {
    fn default() -> Self {
        Self {
            filter: CaseFilter::default(),
            limit: ResultLimit::First(QueryLimits::default().case_limit),
        }
    }
}
