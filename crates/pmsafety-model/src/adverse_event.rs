// SPDX-License-Identifier: Apache-2.0

use crate::{EventStatus, Severity};
use serde::{Deserialize, Serialize};

/// A reported negative outcome associated with a medical product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdverseEvent {
    pub id: String,
    pub case_id: String,
    pub patient_id: String,
    pub product_name: String,
    pub event_description: String,
    pub severity: Severity,
    pub status: EventStatus,
    /// `YYYY-MM-DD`.
    pub report_date: String,
    pub reporter_type: String,
    pub site: String,
}
