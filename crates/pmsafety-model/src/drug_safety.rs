// SPDX-License-Identifier: Apache-2.0

use crate::{RiskLevel, Severity};
use serde::{Deserialize, Serialize};

/// Per-product safety summary. `signal_score` and `risk_level` are published
/// figures, not computed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DrugSafetyRow {
    pub drug_name: String,
    pub total_events: u32,
    pub signal_score: f64,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdverseEventTally {
    pub drug_name: String,
    pub adverse_event: String,
    pub event_count: u32,
    pub severity: Severity,
}
