// SPDX-License-Identifier: Apache-2.0

use crate::WorkflowStage;
use serde::{Deserialize, Serialize};

/// Case-processing bucket counts for one site and stage.
///
/// `total` is carried as published; it is expected to equal
/// `late + over_normal + normal` but nothing enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkflowStatus {
    pub name: String,
    pub late: u32,
    pub over_normal: u32,
    pub normal: u32,
    pub total: u32,
    pub site: String,
    pub stage: WorkflowStage,
}

impl WorkflowStatus {
    #[must_use]
    pub fn new(
        name: &str,
        (late, over_normal, normal, total): (u32, u32, u32, u32),
        site: &str,
        stage: WorkflowStage,
    ) -> Self {
        Self {
            name: name.to_string(),
            late,
            over_normal,
            normal,
            total,
            site: site.to_string(),
            stage,
        }
    }

    #[must_use]
    pub fn bucket_sum(&self) -> u32 {
        self.late + self.over_normal + self.normal
    }
}
