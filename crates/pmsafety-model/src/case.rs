// SPDX-License-Identifier: Apache-2.0

use crate::{EventStatus, Severity, WorkflowStage};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseDetail {
    pub case_id: String,
    pub patient_initials: String,
    pub product_name: String,
    pub status: EventStatus,
    pub workflow_stage: WorkflowStage,
    pub report_date: String,
    pub site: String,
    pub severity: Severity,
}
