//! MCP Tool definitions
//!
//! Defines all 30 tools exposed by the MCP server, grouped by the Harness
//! service that backs them.

use super::protocol::{InputSchema, ToolDefinition};
use serde_json::json;

/// Generate all tool definitions
pub fn all_tools() -> Vec<ToolDefinition> {
    let mut tools = Vec::new();
    tools.extend(chaos_tools());
    tools.extend(user_tools());
    tools.extend(role_tools());
    tools.extend(resource_group_tools());
    tools.extend(secret_tools());
    tools.extend(delegate_token_tools());
    tools.extend(template_tools());
    tools.extend(loadtest_tools());
    tools.extend(sei_tools());
    tools.extend(sto_tools());
    tools.extend(scs_tools());
    tools
}

// ============================================================================
// Chaos Engineering Tools (4)
// ============================================================================

fn chaos_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "chaos_experiments_list".to_string(),
            description: "List chaos experiments in the scoped project".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "org_id": {"type": "string", "description": "Org identifier (defaults to configured org)"},
                    "project_id": {"type": "string", "description": "Project identifier (defaults to configured project)"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 20, max 100)"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "chaos_experiment_get".to_string(),
            description: "Get one chaos experiment by id".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "experiment_id": {"type": "string", "description": "Experiment UUID"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["experiment_id".to_string()]),
            },
        },
        ToolDefinition {
            name: "chaos_experiment_run".to_string(),
            description: "Run a chaos experiment. Every variable the experiment declares must \
                          be given a runtime value"
                .to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "experiment_id": {"type": "string", "description": "Experiment UUID"},
                    "runtime_values": {"type": "object", "description": "Runtime value per declared experiment variable"},
                    "notify": {"type": "boolean", "description": "Notify subscribers when the run finishes"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["experiment_id".to_string()]),
            },
        },
        ToolDefinition {
            name: "chaos_experiment_runs_list".to_string(),
            description: "List past runs of one chaos experiment".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "experiment_id": {"type": "string", "description": "Experiment UUID"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 20, max 100)"}
                })),
                required: Some(vec!["experiment_id".to_string()]),
            },
        },
    ]
}

// ============================================================================
// User Tools (3)
// ============================================================================

fn user_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "get_all_users".to_string(),
            description: "List users visible in the scope, with optional search".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "search_term": {"type": "string", "description": "Match against name/email"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "get_user_info".to_string(),
            description: "Get the user the configured API key belongs to".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({})),
                required: None,
            },
        },
        ToolDefinition {
            name: "invite_users".to_string(),
            description: "Invite users by email, optionally binding roles at the scope"
                .to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "emails": {"type": "array", "items": {"type": "string"}, "description": "Email addresses to invite"},
                    "role_bindings": {
                        "type": "array",
                        "description": "Roles to bind to the invited users",
                        "items": {
                            "type": "object",
                            "properties": {
                                "role_identifier": {"type": "string"},
                                "resource_group_identifier": {"type": "string"},
                                "managed_role": {"type": "boolean"}
                            },
                            "required": ["role_identifier", "resource_group_identifier"]
                        }
                    },
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["emails".to_string()]),
            },
        },
    ]
}

// ============================================================================
// Role Tools (3)
// ============================================================================

fn role_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_roles".to_string(),
            description: "List roles visible in the scope".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "search_term": {"type": "string", "description": "Match against role name"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "get_role".to_string(),
            description: "Get one role by identifier".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "role_id": {"type": "string", "description": "Role identifier"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["role_id".to_string()]),
            },
        },
        ToolDefinition {
            name: "create_role_assignments".to_string(),
            description: "Bind principals (USER, USER_GROUP or SERVICE_ACCOUNT) to roles over \
                          resource groups"
                .to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "assignments": {
                        "type": "array",
                        "description": "Role assignments to create",
                        "items": {
                            "type": "object",
                            "properties": {
                                "resource_group_identifier": {"type": "string"},
                                "role_identifier": {"type": "string"},
                                "principal": {
                                    "type": "object",
                                    "properties": {
                                        "identifier": {"type": "string"},
                                        "type": {"type": "string", "enum": ["USER", "USER_GROUP", "SERVICE_ACCOUNT"]},
                                        "scope_level": {"type": "string", "enum": ["account", "organization", "project"]}
                                    },
                                    "required": ["identifier", "type"]
                                }
                            },
                            "required": ["resource_group_identifier", "role_identifier", "principal"]
                        }
                    },
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["assignments".to_string()]),
            },
        },
    ]
}

// ============================================================================
// Resource Group Tools (3)
// ============================================================================

fn resource_group_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_resource_groups".to_string(),
            description: "List resource groups visible in the scope".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "search_term": {"type": "string", "description": "Match against group name"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "get_resource_group".to_string(),
            description: "Get one resource group by identifier".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "resource_group_id": {"type": "string", "description": "Resource group identifier"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["resource_group_id".to_string()]),
            },
        },
        ToolDefinition {
            name: "create_resource_group".to_string(),
            description: "Create a resource group. The identifier is derived from the name \
                          when not supplied"
                .to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "name": {"type": "string", "description": "Display name"},
                    "identifier": {"type": "string", "description": "Identifier (derived from name if absent)"},
                    "description": {"type": "string", "description": "Description"},
                    "included_scopes": {
                        "type": "array",
                        "description": "Scopes the group spans",
                        "items": {
                            "type": "object",
                            "properties": {
                                "org_id": {"type": "string"},
                                "project_id": {"type": "string"},
                                "filter": {"type": "string", "enum": ["EXCLUDING_CHILD_SCOPES", "INCLUDING_CHILD_SCOPES"]}
                            },
                            "required": ["filter"]
                        }
                    },
                    "resource_types": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Resource types the group selects; all resources when absent"
                    },
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["name".to_string()]),
            },
        },
    ]
}

// ============================================================================
// Secret Tools (2)
// ============================================================================

fn secret_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_secrets".to_string(),
            description: "List secret metadata in the scope. Secret values are never returned"
                .to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "secret_type": {"type": "string", "enum": ["SecretText", "SecretFile", "SSHKey", "WinRmCredentials"], "description": "Restrict to one secret kind"},
                    "search_term": {"type": "string", "description": "Match against secret name"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "get_secret".to_string(),
            description: "Get one secret's metadata by identifier".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "secret_id": {"type": "string", "description": "Secret identifier"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["secret_id".to_string()]),
            },
        },
    ]
}

// ============================================================================
// Delegate Token Tools (3)
// ============================================================================

fn delegate_token_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_delegate_tokens".to_string(),
            description: "List delegate tokens, optionally filtered by status".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "status": {"type": "string", "enum": ["ACTIVE", "REVOKED"], "description": "Restrict to one lifecycle state"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "create_delegate_token".to_string(),
            description: "Create a delegate token with the given name".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "token_name": {"type": "string", "description": "Token name (letters, digits, - and _)"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["token_name".to_string()]),
            },
        },
        ToolDefinition {
            name: "revoke_delegate_token".to_string(),
            description: "Revoke a delegate token by name".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "token_name": {"type": "string", "description": "Token name"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["token_name".to_string()]),
            },
        },
    ]
}

// ============================================================================
// Template Tools (2)
// ============================================================================

fn template_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_templates".to_string(),
            description: "List templates visible in the scope".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "template_type": {"type": "string", "enum": ["Step", "Stage", "Pipeline", "CustomDeployment", "MonitoredService", "SecretManager"], "description": "Restrict to one template kind"},
                    "search_term": {"type": "string", "description": "Match against template name"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "get_template".to_string(),
            description: "Get one template, optionally at a specific version label".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "template_id": {"type": "string", "description": "Template identifier"},
                    "version_label": {"type": "string", "description": "Version label (stable version if absent)"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["template_id".to_string()]),
            },
        },
    ]
}

// ============================================================================
// Load Testing Tools (2)
// ============================================================================

fn loadtest_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_load_tests".to_string(),
            description: "List load tests in the scoped project".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "get_load_test_report".to_string(),
            description: "Get the latest report of one load test".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "test_id": {"type": "string", "description": "Load test UUID"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["test_id".to_string()]),
            },
        },
    ]
}

// ============================================================================
// SEI Tools (2)
// ============================================================================

fn sei_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "sei_lead_time_summary".to_string(),
            description: "Lead-time-for-changes summary for a team over a date window"
                .to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "team_ref_id": {"type": "string", "description": "Team reference"},
                    "date_start": {"type": "string", "description": "Window start, YYYY-MM-DD"},
                    "date_end": {"type": "string", "description": "Window end, YYYY-MM-DD"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "sei_deployment_frequency".to_string(),
            description: "Deployment frequency for a team over a date window".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "team_ref_id": {"type": "string", "description": "Team reference"},
                    "date_start": {"type": "string", "description": "Window start, YYYY-MM-DD"},
                    "date_end": {"type": "string", "description": "Window end, YYYY-MM-DD"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: None,
            },
        },
    ]
}

// ============================================================================
// STO Tools (2)
// ============================================================================

fn sto_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_sto_issues".to_string(),
            description: "List security issues matching the filter".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "severity": {"type": "string", "enum": ["Critical", "High", "Medium", "Low", "Info"], "description": "Restrict to one severity band"},
                    "target_id": {"type": "string", "description": "Restrict to one scan target"},
                    "scan_id": {"type": "string", "description": "Restrict to one scan"},
                    "exemption_status": {"type": "string", "enum": ["None", "Pending", "Approved", "Rejected"], "description": "Restrict to one exemption state"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "get_sto_issue".to_string(),
            description: "Get one security issue with occurrence details".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "issue_id": {"type": "string", "description": "Issue UUID"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"}
                })),
                required: Some(vec!["issue_id".to_string()]),
            },
        },
    ]
}

// ============================================================================
// SCS Tools (4)
// ============================================================================

fn scs_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_scs_code_repos".to_string(),
            description: "List tracked code repositories, filterable by component and license"
                .to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "search_term": {"type": "string", "description": "Match against repository name"},
                    "components": {
                        "type": "array",
                        "description": "Component predicates (field, operator, value)",
                        "items": {
                            "type": "object",
                            "properties": {
                                "field": {"type": "string", "enum": ["componentName", "componentVersion"]},
                                "operator": {"type": "string", "enum": ["EQUALS", "CONTAINS", "STARTS_WITH", "NOT_EQUALS", "GREATER_THAN_EQUALS", "LESS_THAN_EQUALS"]},
                                "value": {"type": "string"}
                            },
                            "required": ["field", "operator", "value"]
                        }
                    },
                    "license": {
                        "type": "object",
                        "description": "License predicate",
                        "properties": {
                            "operator": {"type": "string", "enum": ["EQUALS", "CONTAINS", "STARTS_WITH"]},
                            "value": {"type": "string"}
                        },
                        "required": ["operator", "value"]
                    },
                    "dependency_type": {"type": "string", "enum": ["DIRECT", "TRANSITIVE"], "description": "Dependency provenance"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "list_scs_artifacts".to_string(),
            description: "List artifacts with vulnerability and compliance counts as one table"
                .to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "search_term": {"type": "string", "description": "Match against artifact name"},
                    "components": {
                        "type": "array",
                        "description": "Component predicates (field, operator, value)",
                        "items": {
                            "type": "object",
                            "properties": {
                                "field": {"type": "string", "enum": ["componentName", "componentVersion"]},
                                "operator": {"type": "string", "enum": ["EQUALS", "CONTAINS", "STARTS_WITH", "NOT_EQUALS", "GREATER_THAN_EQUALS", "LESS_THAN_EQUALS"]},
                                "value": {"type": "string"}
                            },
                            "required": ["field", "operator", "value"]
                        }
                    },
                    "license": {
                        "type": "object",
                        "description": "License predicate",
                        "properties": {
                            "operator": {"type": "string", "enum": ["EQUALS", "CONTAINS", "STARTS_WITH"]},
                            "value": {"type": "string"}
                        },
                        "required": ["operator", "value"]
                    },
                    "environment_type": {"type": "string", "enum": ["Prod", "NonProd"], "description": "Deployment environment"},
                    "policy_violation": {"type": "string", "description": "Restrict to artifacts violating this policy"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: None,
            },
        },
        ToolDefinition {
            name: "fetch_compliance_results_by_artifact".to_string(),
            description: "Compliance check results for one artifact".to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "artifact_id": {"type": "string", "description": "Artifact identifier"},
                    "standards": {
                        "type": "array",
                        "items": {"type": "string", "enum": ["CIS_BENCHMARKS", "OWASP_TOP_10", "SLSA_FRAMEWORK"]},
                        "description": "Restrict to these standards"
                    },
                    "severity": {"type": "string", "enum": ["CRITICAL", "HIGH", "MEDIUM", "LOW"], "description": "Restrict to one severity band"},
                    "search_term": {"type": "string", "description": "Match against rule name"},
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: Some(vec!["artifact_id".to_string()]),
            },
        },
        ToolDefinition {
            name: "list_artifact_sources".to_string(),
            description: "List artifact sources, each enriched with its latest artifact details. \
                          Sources whose detail fetch fails are skipped"
                .to_string(),
            input_schema: InputSchema {
                schema_type: "object".to_string(),
                properties: Some(json!({
                    "org_id": {"type": "string", "description": "Org identifier"},
                    "project_id": {"type": "string", "description": "Project identifier"},
                    "page": {"type": "integer", "description": "Page index (default 0)"},
                    "size": {"type": "integer", "description": "Page size (default 10, max 100)"}
                })),
                required: None,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tools_count() {
        let tools = all_tools();
        assert_eq!(tools.len(), 30, "Expected 30 tools, got {}", tools.len());
    }

    #[test]
    fn test_tool_names_unique() {
        let tools = all_tools();
        let mut names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        let original_len = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), original_len, "Tool names must be unique");
    }

    #[test]
    fn test_tool_serialization() {
        let tools = all_tools();
        for tool in &tools {
            let json = serde_json::to_string(tool).unwrap();
            assert!(json.contains(&tool.name));
            assert!(json.contains("inputSchema"));
        }
    }

    #[test]
    fn test_all_tools_have_valid_input_schema() {
        let tools = all_tools();
        for tool in &tools {
            assert_eq!(
                tool.input_schema.schema_type, "object",
                "Tool {} input_schema type is not 'object'",
                tool.name
            );
        }
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        let tools = all_tools();
        for tool in &tools {
            assert!(
                !tool.description.is_empty(),
                "Tool {} has empty description",
                tool.name
            );
        }
    }

    #[test]
    fn test_required_params_are_declared_properties() {
        let tools = all_tools();
        for tool in &tools {
            let Some(required) = &tool.input_schema.required else {
                continue;
            };
            let props = tool.input_schema.properties.as_ref().unwrap();
            for field in required {
                assert!(
                    props.get(field).is_some(),
                    "Tool {} requires undeclared field {}",
                    tool.name,
                    field
                );
            }
        }
    }

    #[test]
    fn test_chaos_tools_names() {
        let names: Vec<String> = chaos_tools().into_iter().map(|t| t.name).collect();
        assert!(names.contains(&"chaos_experiments_list".to_string()));
        assert!(names.contains(&"chaos_experiment_get".to_string()));
        assert!(names.contains(&"chaos_experiment_run".to_string()));
        assert!(names.contains(&"chaos_experiment_runs_list".to_string()));
    }

    #[test]
    fn test_scs_tools_names() {
        let names: Vec<String> = scs_tools().into_iter().map(|t| t.name).collect();
        assert!(names.contains(&"list_scs_code_repos".to_string()));
        assert!(names.contains(&"list_scs_artifacts".to_string()));
        assert!(names.contains(&"fetch_compliance_results_by_artifact".to_string()));
        assert!(names.contains(&"list_artifact_sources".to_string()));
    }

    #[test]
    fn test_listing_tools_have_pagination() {
        let tools = all_tools();
        for name in [
            "chaos_experiments_list",
            "get_all_users",
            "list_roles",
            "list_resource_groups",
            "list_secrets",
            "list_templates",
            "list_load_tests",
            "list_sto_issues",
            "list_scs_code_repos",
            "list_scs_artifacts",
            "list_artifact_sources",
        ] {
            let tool = tools.iter().find(|t| t.name == name).unwrap();
            let props = tool.input_schema.properties.as_ref().unwrap();
            assert!(props.get("page").is_some(), "{} lacks page", name);
            assert!(props.get("size").is_some(), "{} lacks size", name);
        }
    }

    #[test]
    fn test_invite_users_requires_emails() {
        let tools = user_tools();
        let invite = tools.iter().find(|t| t.name == "invite_users").unwrap();
        let required = invite.input_schema.required.as_ref().unwrap();
        assert!(required.contains(&"emails".to_string()));
    }

    #[test]
    fn test_create_resource_group_requires_name_only() {
        let tools = resource_group_tools();
        let create = tools
            .iter()
            .find(|t| t.name == "create_resource_group")
            .unwrap();
        let required = create.input_schema.required.as_ref().unwrap();
        assert_eq!(required, &vec!["name".to_string()]);
    }
}
