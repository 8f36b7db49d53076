mod support;

use serde_json::Value;
use support::{json, send_raw, spawn_api};

#[tokio::test]
async fn health_reports_service_identity() {
    let addr = spawn_api().await;
    let (status, _, body) = send_raw(addr, "/api/health", &[]).await;
    assert_eq!(status, 200);
    assert_eq!(
        json(&body),
        serde_json::json!({
            "status": "healthy",
            "service": "Postmarket Safety Surveillance",
            "environment": "development",
            "version": "1.0.0",
        })
    );
}

#[tokio::test]
async fn workflow_status_filters_by_site_and_stage() {
    let addr = spawn_api().await;
    let (_, _, all) = send_raw(addr, "/api/workflow-status", &[]).await;
    assert_eq!(json(&all).as_array().map(Vec::len), Some(9));

    let (_, _, sentinel) = send_raw(addr, "/api/workflow-status?site=%3CAll%3E", &[]).await;
    assert_eq!(json(&sentinel), json(&all));

    let (_, _, germany) = send_raw(addr, "/api/workflow-status?site=Germany", &[]).await;
    let germany = json(&germany);
    let rows = germany.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r["site"] == "Germany"));
    assert_eq!(rows[1]["overNormal"], 49);

    let (_, _, review) =
        send_raw(addr, "/api/workflow-status?stage=Medical%20Review", &[]).await;
    let names: Vec<String> = json(&review)
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|r| r["name"].as_str().map(ToString::to_string))
        .collect();
    assert_eq!(names, vec!["Germany Medical Review", "US Medical Review"]);

    let (_, _, empty_site) = send_raw(addr, "/api/workflow-status?site=", &[]).await;
    assert_eq!(json(&empty_site), json(&all));
}

#[tokio::test]
async fn adverse_events_honour_filters_and_limit() {
    let addr = spawn_api().await;
    let (status, _, body) = send_raw(addr, "/api/adverse-events", &[]).await;
    assert_eq!(status, 200);
    assert_eq!(json(&body).as_array().map(Vec::len), Some(3));

    let (_, _, body) = send_raw(addr, "/api/adverse-events?status=Under%20Review", &[]).await;
    let ids: Vec<Value> = json(&body)
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["id"].clone())
        .collect();
    assert_eq!(ids, vec![Value::from("AE001"), Value::from("AE003")]);

    let (_, _, body) = send_raw(addr, "/api/adverse-events?limit=1", &[]).await;
    assert_eq!(json(&body)[0]["id"], "AE001");
    assert_eq!(json(&body).as_array().map(Vec::len), Some(1));

    let (status, _, body) = send_raw(addr, "/api/adverse-events?limit=-1", &[]).await;
    assert_eq!(status, 200);
    let ids: Vec<Value> = json(&body)
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["id"].clone())
        .collect();
    assert_eq!(ids, vec![Value::from("AE001"), Value::from("AE002")]);

    let (_, _, body) = send_raw(addr, "/api/adverse-events?limit=-5", &[]).await;
    assert_eq!(json(&body), serde_json::json!([]));

    let (status, _, body) =
        send_raw(addr, "/api/adverse-events?limit=99999999999999999999", &[]).await;
    assert_eq!(status, 200);
    assert_eq!(json(&body).as_array().map(Vec::len), Some(3));

    let (_, _, body) = send_raw(addr, "/api/adverse-events?severity=Critical", &[]).await;
    assert_eq!(json(&body), serde_json::json!([]));
}

#[tokio::test]
async fn non_integer_limit_is_rejected() {
    let addr = spawn_api().await;
    for path in ["/api/adverse-events?limit=abc", "/api/cases?limit=1.5"] {
        let (status, _, body) = send_raw(addr, path, &[]).await;
        assert_eq!(status, 422, "{path}");
        let body = json(&body);
        assert_eq!(body["error"]["code"], "InvalidQueryParameter");
        assert_eq!(body["error"]["details"]["parameter"], "limit");
        assert_eq!(body["detail"], "invalid query parameter: limit");
    }
}

#[tokio::test]
async fn adverse_event_lookup_by_id() {
    let addr = spawn_api().await;
    let (status, _, body) = send_raw(addr, "/api/adverse-events/AE002", &[]).await;
    assert_eq!(status, 200);
    let event = json(&body);
    assert_eq!(event["productName"], "VaccineY");
    assert_eq!(event["reporterType"], "Consumer");

    let (status, _, body) = send_raw(addr, "/api/adverse-events/AE999", &[]).await;
    assert_eq!(status, 404);
    let body = json(&body);
    assert_eq!(body["detail"], "Adverse event not found");
    assert_eq!(body["error"]["code"], "NotFound");
    assert_eq!(body["error"]["details"]["id"], "AE999");

    let (status, _, _) = send_raw(addr, "/api/adverse-events/ae002", &[]).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn cases_are_synthesized_from_the_clock() {
    let addr = spawn_api().await;
    let (status, _, body) = send_raw(addr, "/api/cases", &[]).await;
    assert_eq!(status, 200);
    let cases = json(&body);
    assert_eq!(cases.as_array().map(Vec::len), Some(50));
    assert_eq!(
        cases[0],
        serde_json::json!({
            "caseId": "CASE-2024-001",
            "patientInitials": "P.B",
            "productName": "VaccineY",
            "status": "Under Review",
            "workflowStage": "Medical Review",
            "reportDate": "2024-02-29",
            "site": "United States",
            "severity": "Moderate",
        })
    );

    let (_, _, body) = send_raw(addr, "/api/cases?workflow_stage=Validation&limit=5", &[]).await;
    let ids: Vec<String> = json(&body)
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|c| c["caseId"].as_str().map(ToString::to_string))
        .collect();
    assert_eq!(
        ids,
        vec![
            "CASE-2024-004",
            "CASE-2024-008",
            "CASE-2024-012",
            "CASE-2024-016",
            "CASE-2024-020"
        ]
    );

    let (_, _, body) = send_raw(addr, "/api/cases?limit=-48", &[]).await;
    let ids: Vec<String> = json(&body)
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|c| c["caseId"].as_str().map(ToString::to_string))
        .collect();
    assert_eq!(ids, vec!["CASE-2024-001", "CASE-2024-002"]);
}

#[tokio::test]
async fn dashboard_aggregates() {
    let addr = spawn_api().await;
    let (_, _, body) = send_raw(addr, "/api/dashboard/summary", &[]).await;
    assert_eq!(
        json(&body),
        serde_json::json!({
            "totalCases": 238,
            "lateCases": 116,
            "overNormalCases": 122,
            "normalCases": 0,
            "totalAdverseEvents": 3,
            "criticalEvents": 1,
            "sitesCount": 3,
            "openCases": 3,
        })
    );

    let (_, _, body) = send_raw(addr, "/api/dashboard/kpis", &[]).await;
    assert_eq!(
        json(&body),
        serde_json::json!({
            "totalCases": 238,
            "totalDrugs": 150,
            "highRiskDrugs": 12,
            "totalAdverseEvents": 3,
        })
    );
}

#[tokio::test]
async fn sites_and_openapi_are_served() {
    let addr = spawn_api().await;
    let (_, _, body) = send_raw(addr, "/api/sites", &[]).await;
    let sites = json(&body);
    assert_eq!(sites.as_array().map(Vec::len), Some(3));
    assert_eq!(
        sites[2],
        serde_json::json!({"id": "us", "name": "Relsys United States", "country": "United States"})
    );

    let (status, _, body) = send_raw(addr, "/api/openapi.json", &[]).await;
    assert_eq!(status, 200);
    let spec = json(&body);
    assert_eq!(spec["info"]["title"], "Postmarket Safety Surveillance API");
    assert!(spec["paths"]["/api/cases"].is_object());
}

#[tokio::test]
async fn unknown_routes_answer_json_not_found_without_spa() {
    let addr = spawn_api().await;
    for path in ["/api/nope", "/dashboard", "/"] {
        let (status, head, body) = send_raw(addr, path, &[]).await;
        assert_eq!(status, 404, "{path}");
        assert!(head.to_ascii_lowercase().contains("application/json"));
        assert_eq!(json(&body)["error"]["code"], "NotFound");
    }
}

#[tokio::test]
async fn responses_carry_request_ids() {
    let addr = spawn_api().await;
    let (_, head, _) = send_raw(addr, "/api/health", &[("x-request-id", "req-test-1")]).await;
    assert_eq!(
        support::header_value(&head, "x-request-id").as_deref(),
        Some("req-test-1")
    );
    let (_, head, _) = send_raw(addr, "/api/health", &[]).await;
    let generated = support::header_value(&head, "x-request-id").expect("generated id");
    assert!(generated.starts_with("req-"));
}
