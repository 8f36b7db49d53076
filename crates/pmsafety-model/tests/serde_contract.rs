// SPDX-License-Identifier: Apache-2.0

use pmsafety_model::{
    AdverseEvent, CaseDetail, EventStatus, Severity, WorkflowStage, WorkflowStatus,
};
use serde_json::{json, Value};

fn sample_event() -> AdverseEvent {
    AdverseEvent {
        id: "AE010".to_string(),
        case_id: "CASE-2024-010".to_string(),
        patient_id: "P10000".to_string(),
        product_name: "DrugX-500mg".to_string(),
        event_description: "Rash".to_string(),
        severity: Severity::Mild,
        status: EventStatus::UnderReview,
        report_date: "2024-02-01".to_string(),
        reporter_type: "Consumer".to_string(),
        site: "Japan".to_string(),
    }
}

#[test]
fn adverse_event_uses_camel_case_wire_names() {
    let encoded = serde_json::to_value(sample_event()).expect("encode");
    let Value::Object(map) = encoded else {
        panic!("adverse event must encode as an object");
    };
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    for key in [
        "id",
        "caseId",
        "patientId",
        "productName",
        "eventDescription",
        "severity",
        "status",
        "reportDate",
        "reporterType",
        "site",
    ] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(map["status"], "Under Review");
}

#[test]
fn workflow_status_encodes_over_normal_and_stage_label() {
    let row = WorkflowStatus::new(
        "Germany Expediting Reporting",
        (43, 49, 0, 92),
        "Germany",
        WorkflowStage::ExpeditingReporting,
    );
    let encoded = serde_json::to_value(&row).expect("encode");
    assert_eq!(encoded["overNormal"], 49);
    assert_eq!(encoded["stage"], "Expediting Reporting");
    assert_eq!(row.bucket_sum(), 92);
}

#[test]
fn case_detail_rejects_unknown_fields() {
    let raw = json!({
        "caseId": "CASE-2024-001",
        "patientInitials": "P.B",
        "productName": "VaccineY",
        "status": "Under Review",
        "workflowStage": "Medical Review",
        "reportDate": "2024-01-01",
        "site": "United States",
        "severity": "Moderate",
        "assignedTo": "nobody"
    });
    assert!(serde_json::from_value::<CaseDetail>(raw).is_err());
}

#[test]
fn case_detail_decodes_display_labels() {
    let raw = json!({
        "caseId": "CASE-2024-004",
        "patientInitials": "P.E",
        "productName": "VaccineY",
        "status": "Under Review",
        "workflowStage": "Data Entry",
        "reportDate": "2024-01-01",
        "site": "United States",
        "severity": "Moderate"
    });
    let decoded: CaseDetail = serde_json::from_value(raw).expect("decode");
    assert_eq!(decoded.status, EventStatus::UnderReview);
    assert_eq!(decoded.workflow_stage, WorkflowStage::DataEntry);
}
