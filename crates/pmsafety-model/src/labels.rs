// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EventStatus {
    Open,
    #[serde(rename = "Under Review")]
    UnderReview,
    Closed,
}

impl EventStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::UnderReview => "Under Review",
            Self::Closed => "Closed",
        }
    }

    /// Open and under-review reports are both still being worked.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Open | Self::UnderReview)
    }
}

/// Named processing step a case passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum WorkflowStage {
    #[serde(rename = "Data Entry")]
    DataEntry,
    #[serde(rename = "Medical Review")]
    MedicalReview,
    Reporting,
    Validation,
    #[serde(rename = "Expediting Reporting")]
    ExpeditingReporting,
}

impl WorkflowStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DataEntry => "Data Entry",
            Self::MedicalReview => "Medical Review",
            Self::Reporting => "Reporting",
            Self::Validation => "Validation",
            Self::ExpeditingReporting => "Expediting Reporting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

macro_rules! display_as_label {
    ($($ty:ty),+) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_label!(Severity, EventStatus, WorkflowStage, RiskLevel);
