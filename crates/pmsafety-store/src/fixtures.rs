// SPDX-License-Identifier: Apache-2.0

use pmsafety_model::{
    AdverseEvent, AdverseEventTally, DashboardDescriptor, DrugSafetyRow, EventStatus, RiskLevel,
    Severity, Site, WorkflowStage, WorkflowStatus,
};

pub(crate) fn workflow_rows() -> Vec<WorkflowStatus> {
    use WorkflowStage::{DataEntry, ExpeditingReporting, MedicalReview, Reporting, Validation};
    vec![
        WorkflowStatus::new("Germany Data Entry", (8, 8, 0, 16), "Germany", DataEntry),
        WorkflowStatus::new(
            "Germany Expediting Reporting",
            (43, 49, 0, 92),
            "Germany",
            ExpeditingReporting,
        ),
        WorkflowStatus::new("Germany Medical Review", (3, 3, 0, 6), "Germany", MedicalReview),
        WorkflowStatus::new("Japan Reporting", (4, 4, 0, 8), "Japan", Reporting),
        WorkflowStatus::new("Japan Validation", (2, 2, 0, 4), "Japan", Validation),
        WorkflowStatus::new(
            "US Medical Review",
            (12, 12, 0, 24),
            "United States",
            MedicalReview,
        ),
        WorkflowStatus::new("US Data Entry", (13, 13, 0, 26), "United States", DataEntry),
        WorkflowStatus::new("US Reporting", (23, 23, 0, 46), "United States", Reporting),
        WorkflowStatus::new("US Validation", (8, 8, 0, 16), "United States", Validation),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    case_id: &str,
    patient_id: &str,
    product_name: &str,
    event_description: &str,
    severity: Severity,
    status: EventStatus,
    report_date: &str,
    reporter_type: &str,
    site: &str,
) -> AdverseEvent {
    AdverseEvent {
        id: id.to_string(),
        case_id: case_id.to_string(),
        patient_id: patient_id.to_string(),
        product_name: product_name.to_string(),
        event_description: event_description.to_string(),
        severity,
        status,
        report_date: report_date.to_string(),
        reporter_type: reporter_type.to_string(),
        site: site.to_string(),
    }
}

pub(crate) fn adverse_events() -> Vec<AdverseEvent> {
    vec![
        event(
            "AE001",
            "CASE-2024-001",
            "P12345",
            "DrugX-500mg",
            "Patient reported severe headache and nausea",
            Severity::Moderate,
            EventStatus::UnderReview,
            "2024-01-15",
            "Healthcare Professional",
            "Germany",
        ),
        event(
            "AE002",
            "CASE-2024-002",
            "P12346",
            "VaccineY",
            "Injection site reaction with swelling",
            Severity::Mild,
            EventStatus::Open,
            "2024-01-16",
            "Consumer",
            "United States",
        ),
        event(
            "AE003",
            "CASE-2024-003",
            "P12347",
            "DrugZ-100mg",
            "Allergic reaction with respiratory distress",
            Severity::Severe,
            EventStatus::UnderReview,
            "2024-01-17",
            "Healthcare Professional",
            "Japan",
        ),
    ]
}

pub(crate) fn sites() -> Vec<Site> {
    vec![
        Site::new("germany", "Relsys Germany", "Germany"),
        Site::new("japan", "Relsys Japan", "Japan"),
        Site::new("us", "Relsys United States", "United States"),
    ]
}

pub(crate) fn dashboards() -> Vec<DashboardDescriptor> {
    vec![
        DashboardDescriptor::new(
            "executive-kpis",
            "Executive KPIs",
            "Key performance indicators and executive summary",
        ),
        DashboardDescriptor::new(
            "drug-safety-analysis",
            "Drug Safety Risk Analysis",
            "Comprehensive drug safety signal analysis and risk heatmap",
        ),
        DashboardDescriptor::new(
            "outcome-analytics",
            "Outcome Analytics",
            "Adverse event outcome distribution and trends",
        ),
        DashboardDescriptor::new(
            "time-series",
            "Time Series Analysis",
            "Monthly case trends and temporal patterns",
        ),
    ]
}

pub(crate) fn drug_safety_rows() -> Vec<DrugSafetyRow> {
    [
        ("DrugX-500mg", 156, 8.5, RiskLevel::High),
        ("VaccineY", 89, 5.2, RiskLevel::Medium),
        ("DrugZ-100mg", 234, 9.1, RiskLevel::High),
        ("TherapyA", 45, 3.8, RiskLevel::Low),
        ("MedicationB", 112, 6.3, RiskLevel::Medium),
    ]
    .into_iter()
    .map(|(drug_name, total_events, signal_score, risk_level)| DrugSafetyRow {
        drug_name: drug_name.to_string(),
        total_events,
        signal_score,
        risk_level,
    })
    .collect()
}

pub(crate) fn top_adverse_events() -> Vec<AdverseEventTally> {
    [
        ("DrugX-500mg", "Severe headache", 45, Severity::Moderate),
        ("VaccineY", "Injection site reaction", 32, Severity::Mild),
        ("DrugZ-100mg", "Allergic reaction", 67, Severity::Severe),
        ("TherapyA", "Nausea", 23, Severity::Mild),
        ("MedicationB", "Dizziness", 38, Severity::Moderate),
    ]
    .into_iter()
    .map(|(drug_name, adverse_event, event_count, severity)| AdverseEventTally {
        drug_name: drug_name.to_string(),
        adverse_event: adverse_event.to_string(),
        event_count,
        severity,
    })
    .collect()
}
