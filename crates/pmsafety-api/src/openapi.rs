// SPDX-License-Identifier: Apache-2.0

use crate::{API_DESCRIPTION, API_TITLE, API_VERSION};
use serde_json::{json, Value};

fn query_param(name: &str, kind: &str) -> Value {
    json!({"name": name, "in": "query", "required": false, "schema": {"type": kind}})
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorBody"}}}
    })
}

fn list_of(schema: &str) -> Value {
    json!({
        "description": "ok",
        "content": {"application/json": {"schema": {
            "type": "array",
            "items": {"$ref": format!("#/components/schemas/{schema}")}
        }}}
    })
}

fn object_of(schema: &str) -> Value {
    json!({
        "description": "ok",
        "content": {"application/json": {"schema": {"$ref": format!("#/components/schemas/{schema}")}}}
    })
}

fn string_props(names: &[&str]) -> Value {
    let mut props = serde_json::Map::new();
    for name in names {
        props.insert((*name).to_string(), json!({"type": "string"}));
    }
    Value::Object(props)
}

fn integer_props(names: &[&str]) -> Value {
    let mut props = serde_json::Map::new();
    for name in names {
        props.insert((*name).to_string(), json!({"type": "integer"}));
    }
    Value::Object(props)
}

fn merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Object(mut left), Value::Object(right)) => {
            left.extend(right);
            Value::Object(left)
        }
        (left, _) => left,
    }
}

fn record_schema(props: Value) -> Value {
    let required: Vec<String> = props
        .as_object()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default();
    json!({"type": "object", "required": required, "properties": props})
}

#[must_use]
pub fn openapi_spec() -> Value {
    let limit = json!({"name": "limit", "in": "query", "required": false, "schema": {"type": "integer"}});
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": API_TITLE,
        "description": API_DESCRIPTION,
        "version": API_VERSION
      },
      "paths": {
        "/api/health": {"get": {"responses": {"200": object_of("Health")}}},
        "/api/workflow-status": {"get": {
          "parameters": [query_param("site", "string"), query_param("stage", "string")],
          "responses": {"200": list_of("WorkflowStatus")}
        }},
        "/api/adverse-events": {"get": {
          "parameters": [
            query_param("site", "string"),
            query_param("severity", "string"),
            query_param("status", "string"),
            merge(limit.clone(), json!({"schema": {"type": "integer", "default": 100}}))
          ],
          "responses": {
            "200": list_of("AdverseEvent"),
            "422": error_response("limit is not an integer")
          }
        }},
        "/api/adverse-events/{event_id}": {"get": {
          "parameters": [{"name": "event_id", "in": "path", "required": true, "schema": {"type": "string"}}],
          "responses": {
            "200": object_of("AdverseEvent"),
            "404": error_response("Adverse event not found")
          }
        }},
        "/api/cases": {"get": {
          "parameters": [
            query_param("site", "string"),
            query_param("status", "string"),
            query_param("workflow_stage", "string"),
            merge(limit, json!({"schema": {"type": "integer", "default": 50}}))
          ],
          "responses": {
            "200": list_of("CaseDetail"),
            "422": error_response("limit is not an integer")
          }
        }},
        "/api/dashboard/summary": {"get": {"responses": {"200": object_of("DashboardSummary")}}},
        "/api/dashboard/kpis": {"get": {"responses": {"200": object_of("DashboardKpis")}}},
        "/api/sites": {"get": {"responses": {"200": list_of("Site")}}},
        "/api/openapi.json": {"get": {"responses": {"200": {"description": "this document"}}}}
      },
      "components": {
        "schemas": {
          "Health": record_schema(string_props(&["status", "service", "environment", "version"])),
          "WorkflowStatus": record_schema(merge(
            string_props(&["name", "site", "stage"]),
            integer_props(&["late", "overNormal", "normal", "total"])
          )),
          "AdverseEvent": record_schema(string_props(&[
            "id", "caseId", "patientId", "productName", "eventDescription",
            "severity", "status", "reportDate", "reporterType", "site"
          ])),
          "CaseDetail": record_schema(string_props(&[
            "caseId", "patientInitials", "productName", "status",
            "workflowStage", "reportDate", "site", "severity"
          ])),
          "DashboardSummary": record_schema(integer_props(&[
            "totalCases", "lateCases", "overNormalCases", "normalCases",
            "totalAdverseEvents", "criticalEvents", "sitesCount", "openCases"
          ])),
          "DashboardKpis": record_schema(integer_props(&[
            "totalCases", "totalDrugs", "highRiskDrugs", "totalAdverseEvents"
          ])),
          "Site": record_schema(string_props(&["id", "name", "country"])),
          "ApiError": {
            "type": "object",
            "required": ["code", "message", "details"],
            "additionalProperties": false,
            "properties": {
              "code": {"type": "string", "enum": ["InvalidQueryParameter", "NotFound", "Internal"]},
              "message": {"type": "string"},
              "details": {"type": "object"}
            }
          },
          "ErrorBody": {
            "type": "object",
            "required": ["detail", "error"],
            "properties": {
              "detail": {"type": "string"},
              "error": {"$ref": "#/components/schemas/ApiError"}
            }
          }
        }
      }
    })
}
