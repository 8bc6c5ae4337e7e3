//! Tool handler integration tests
//!
//! Drives ToolHandler end-to-end against a mocked Harness gateway.
//! Run with: cargo test --test handler_tests

use harness_mcp::client::Services;
use harness_mcp::mcp::handlers::{ToolError, ToolHandler};
use harness_mcp::HarnessConfig;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXPERIMENT_ID: &str = "8f14e45f-ceea-4a7a-9c4b-1d2b3c4d5e6f";

fn test_config(base_url: &str, org: Option<&str>, project: Option<&str>) -> HarnessConfig {
    HarnessConfig {
        base_url: base_url.to_string(),
        api_key: "pat.testacct.token.secret".to_string(),
        account_id: "testacct".to_string(),
        default_org_id: org.map(String::from),
        default_project_id: project.map(String::from),
    }
}

fn handler_for(server: &MockServer) -> ToolHandler {
    let config = test_config(&server.uri(), Some("default"), Some("sandbox"));
    let services = Services::new(&config).unwrap();
    ToolHandler::new(Arc::new(services), Arc::new(config))
}

/// Handler with no configured org/project defaults.
fn unscoped_handler_for(server: &MockServer) -> ToolHandler {
    let config = test_config(&server.uri(), None, None);
    let services = Services::new(&config).unwrap();
    ToolHandler::new(Arc::new(services), Arc::new(config))
}

// ============================================================================
// Parameter and scope validation
// ============================================================================

#[tokio::test]
async fn test_missing_required_parameter_names_the_field() {
    let server = MockServer::start().await;
    let handler = handler_for(&server);

    let err = handler
        .handle("chaos_experiment_get", Some(json!({})))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Invalid(_)));
    assert!(err.to_string().contains("experiment_id"));
}

#[tokio::test]
async fn test_strict_scope_without_project_is_rejected() {
    let server = MockServer::start().await;
    let handler = unscoped_handler_for(&server);

    let err = handler
        .handle("chaos_experiments_list", Some(json!({})))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Invalid(_)));
    assert!(err.to_string().contains("required for project/org scope"));
}

#[tokio::test]
async fn test_malformed_uuid_is_rejected_without_calling_upstream() {
    let server = MockServer::start().await;
    let handler = handler_for(&server);

    let err = handler
        .handle(
            "chaos_experiment_get",
            Some(json!({"experiment_id": "not-a-uuid"})),
        )
        .await
        .unwrap_err();

    assert!(err.to_string().contains("experiment_id must be a valid UUID"));
    // No mock was mounted; wiremock answers 404 to anything that slipped
    // through, and received_requests proves nothing did.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_principal_type_names_value_and_allowed_set() {
    let server = MockServer::start().await;
    let handler = handler_for(&server);

    let err = handler
        .handle(
            "create_role_assignments",
            Some(json!({
                "assignments": [{
                    "resource_group_identifier": "_all_resources",
                    "role_identifier": "_account_viewer",
                    "principal": {"identifier": "alex", "type": "ROBOT"}
                }]
            })),
        )
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("ROBOT"));
    assert!(msg.contains("USER_GROUP"));
    assert!(msg.contains("SERVICE_ACCOUNT"));
}

// ============================================================================
// Error channels
// ============================================================================

#[tokio::test]
async fn test_upstream_500_surfaces_internal_non_2xx_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chaos/manager/api/experiments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let err = handler
        .handle("chaos_experiments_list", Some(json!({})))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Internal(_)));
    assert!(err.to_string().contains("non-2xx status: 500"));
}

#[tokio::test]
async fn test_upstream_404_surfaces_internal_non_2xx_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ng/api/v2/secrets/db_password"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let err = handler
        .handle("get_secret", Some(json!({"secret_id": "db_password"})))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Internal(_)));
    assert!(err.to_string().contains("non-2xx status: 404"));
}

// ============================================================================
// Delegation and response marshalling
// ============================================================================

#[tokio::test]
async fn test_successful_response_round_trips_upstream_payload() {
    let payload = json!({
        "status": "SUCCESS",
        "data": {
            "content": [
                {"identifier": "pod_delete", "name": "Pod Delete", "infraType": "Kubernetes"},
                {"identifier": "dns_chaos", "name": "DNS Chaos", "infraType": "Kubernetes"}
            ],
            "totalItems": 2
        }
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chaos/manager/api/experiments"))
        .and(query_param("accountIdentifier", "testacct"))
        .and(query_param("orgIdentifier", "default"))
        .and(query_param("projectIdentifier", "sandbox"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let result = handler
        .handle("chaos_experiments_list", Some(json!({})))
        .await
        .unwrap();

    // Marshal as the server would, then parse back: must be equivalent
    // field-for-field to the upstream payload.
    let text = serde_json::to_string_pretty(&result).unwrap();
    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, payload);
}

#[tokio::test]
async fn test_pagination_clamp_is_visible_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chaos/manager/api/experiments"))
        .and(query_param("page", "0"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    handler
        .handle(
            "chaos_experiments_list",
            Some(json!({"page": -5, "size": 999})),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_request_scope_overrides_configured_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chaos/manager/api/experiments"))
        .and(query_param("orgIdentifier", "other_org"))
        .and(query_param("projectIdentifier", "other_proj"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    handler
        .handle(
            "chaos_experiments_list",
            Some(json!({"org_id": "other_org", "project_id": "other_proj"})),
        )
        .await
        .unwrap();
}

// ============================================================================
// Chaos run precondition
// ============================================================================

#[tokio::test]
async fn test_run_experiment_rejects_missing_runtime_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/chaos/manager/api/experiments/{EXPERIMENT_ID}/variables"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"name": "TARGET_NAMESPACE"}, {"name": "CHAOS_DURATION"}]
        })))
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let err = handler
        .handle(
            "chaos_experiment_run",
            Some(json!({
                "experiment_id": EXPERIMENT_ID,
                "runtime_values": {"TARGET_NAMESPACE": "prod"}
            })),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Invalid(_)));
    assert_eq!(
        err.to_string(),
        "all experiment variables must be given a runtime value"
    );
}

#[tokio::test]
async fn test_run_experiment_launches_when_all_variables_supplied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/chaos/manager/api/experiments/{EXPERIMENT_ID}/variables"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"name": "TARGET_NAMESPACE"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/chaos/manager/api/experiments/{EXPERIMENT_ID}/run"
        )))
        .and(body_json(json!({
            "runtimeValues": {"TARGET_NAMESPACE": "prod"},
            "notify": true
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"runId": "run-1"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let result = handler
        .handle(
            "chaos_experiment_run",
            Some(json!({
                "experiment_id": EXPERIMENT_ID,
                "runtime_values": {"TARGET_NAMESPACE": "prod"},
                "notify": true
            })),
        )
        .await
        .unwrap();

    assert_eq!(result["data"]["runId"], "run-1");
}

// ============================================================================
// SCS enrichment and table projection
// ============================================================================

#[tokio::test]
async fn test_artifact_sources_enrichment_skips_failed_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ssca/api/v1/artifact-sources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sources": [
                {"id": "src-1", "name": "docker-hub", "url": "https://hub.docker.com"},
                {"id": "src-2", "name": "gcr", "url": "https://gcr.io"}
            ],
            "totalItems": 2
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ssca/api/v1/artifact-sources/src-1/latest-artifact"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "svc/api", "tag": "1.4.2"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ssca/api/v1/artifact-sources/src-2/latest-artifact"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let result = handler
        .handle("list_artifact_sources", Some(json!({})))
        .await
        .unwrap();

    // The failed source is skipped, not replaced by a placeholder.
    let sources = result["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0]["id"], "src-1");
    assert_eq!(sources[0]["latest_artifact"]["tag"], "1.4.2");
    assert_eq!(result["total_items"], 2);
}

#[tokio::test]
async fn test_artifact_listing_projects_one_flat_table() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ssca/api/v1/artifacts/list"))
        .and(body_json(json!({
            "componentFilter": [
                {"fieldName": "componentName", "operator": "CONTAINS", "value": "log4j"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {
                    "id": "a1",
                    "name": "svc/api",
                    "tag": "1.4.2",
                    "vulnerabilitySummary": {"critical": 2, "high": 5, "medium": 1, "low": 0},
                    "complianceSummary": {"passCount": 40, "failCount": 3}
                },
                {"id": "a2", "name": "svc/worker"}
            ],
            "totalItems": 14,
            "totalPages": 2
        })))
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    let result = handler
        .handle(
            "list_scs_artifacts",
            Some(json!({
                "components": [
                    {"field": "componentName", "operator": "CONTAINS", "value": "log4j"}
                ]
            })),
        )
        .await
        .unwrap();

    let rows = result["artifacts"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["artifact"], "svc/api");
    assert_eq!(rows[0]["critical"], 2);
    assert_eq!(rows[0]["compliance_fail"], 3);
    // Sparse upstream rows flatten to zero counts, not nulls.
    assert_eq!(rows[1]["critical"], 0);
    assert_eq!(rows[1]["compliance_pass"], 0);
    assert_eq!(result["total_items"], 14);
    assert_eq!(result["total_pages"], 2);
    assert_eq!(result["page"], 0);
    assert_eq!(result["size"], 10);
}

#[tokio::test]
async fn test_malformed_component_filter_names_the_field() {
    let server = MockServer::start().await;
    let handler = handler_for(&server);

    let err = handler
        .handle(
            "list_scs_code_repos",
            Some(json!({"components": [{"field": "componentName", "operator": "LIKE", "value": "x"}]})),
        )
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.starts_with("components:"));
    assert!(msg.contains("LIKE"));
}

// ============================================================================
// Resource groups
// ============================================================================

#[tokio::test]
async fn test_create_resource_group_derives_identifier_from_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resourcegroup/api/v2/resourcegroup"))
        .and(body_json(json!({
            "resourceGroup": {
                "identifier": "my-experiment-1",
                "name": "My (Experiment) #1!",
                "accountIdentifier": "testacct",
                "orgIdentifier": "default",
                "projectIdentifier": "sandbox",
                "resourceFilter": {"includeAllResources": true}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "SUCCESS"})))
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    handler
        .handle(
            "create_resource_group",
            Some(json!({"name": "My (Experiment) #1!"})),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_resource_group_rejects_malformed_identifier() {
    let server = MockServer::start().await;
    let handler = handler_for(&server);

    let err = handler
        .handle(
            "create_resource_group",
            Some(json!({"name": "CI", "identifier": "1 bad id"})),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Invalid(_)));
    assert!(err.to_string().contains("1 bad id"));
}

// ============================================================================
// Misc delegation
// ============================================================================

#[tokio::test]
async fn test_list_delegate_tokens_forwards_status_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ng/api/delegate-token-ng"))
        .and(query_param("status", "REVOKED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resource": []})))
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler_for(&server);
    handler
        .handle("list_delegate_tokens", Some(json!({"status": "REVOKED"})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_sei_filter_rejects_malformed_dates() {
    let server = MockServer::start().await;
    let handler = handler_for(&server);

    let err = handler
        .handle(
            "sei_lead_time_summary",
            Some(json!({"team_ref_id": "team-42", "date_start": "01/01/2026"})),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Invalid(_)));
    assert!(err.to_string().contains("date_start"));
}

#[tokio::test]
async fn test_unknown_tool_is_an_internal_error() {
    let server = MockServer::start().await;
    let handler = handler_for(&server);

    let err = handler.handle("no_such_tool", None).await.unwrap_err();
    assert!(matches!(err, ToolError::Internal(_)));
    assert!(err.to_string().contains("no_such_tool"));
}
