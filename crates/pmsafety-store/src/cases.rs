// SPDX-License-Identifier: Apache-2.0

use chrono::{Days, NaiveDate};
use pmsafety_model::{CaseDetail, EventStatus, Severity, WorkflowStage};

pub const CASE_COUNT: u32 = 50;

const PRODUCTS: [&str; 3] = ["DrugX-500mg", "VaccineY", "DrugZ-100mg"];
const STATUSES: [EventStatus; 3] = [
    EventStatus::Open,
    EventStatus::UnderReview,
    EventStatus::Closed,
];
const STAGES: [WorkflowStage; 4] = [
    WorkflowStage::DataEntry,
    WorkflowStage::MedicalReview,
    WorkflowStage::Reporting,
    WorkflowStage::Validation,
];
const SITES: [&str; 3] = ["Germany", "United States", "Japan"];
const SEVERITIES: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

/// Builds case `index`; its report date is `index` days before `today`.
#[must_use]
pub fn synthesize_case(index: u32, today: NaiveDate) -> CaseDetail {
    let i = index as usize;
    let initial = char::from(b'A' + (index % 26) as u8);
    let report_date = today
        .checked_sub_days(Days::new(u64::from(index)))
        .unwrap_or(NaiveDate::MIN);
    CaseDetail {
        case_id: format!("CASE-2024-{index:03}"),
        patient_initials: format!("P.{initial}"),
        product_name: PRODUCTS[i % PRODUCTS.len()].to_string(),
        status: STATUSES[i % STATUSES.len()],
        workflow_stage: STAGES[i % STAGES.len()],
        report_date: report_date.format("%Y-%m-%d").to_string(),
        site: SITES[i % SITES.len()].to_string(),
        severity: SEVERITIES[i % SEVERITIES.len()],
    }
}

/// Cases 1 through [`CASE_COUNT`], in index order.
#[must_use]
pub fn synthesize_cases(today: NaiveDate) -> Vec<CaseDetail> {
    (1..=CASE_COUNT)
        .map(|index| synthesize_case(index, today))
        .collect()
}
