//! MCP Tool handlers
//!
//! Implements the adapter logic for each tool: decode the arguments into a
//! typed request struct, resolve the scope, call the backing Harness
//! client, and marshal the response.

use crate::client::{
    acl, chaos, delegate, loadtest, principal, resourcegroup, scs, secrets, sei, sto, template,
};
use crate::client::{ClientError, Scope, ScopeError, Services};
use crate::HarnessConfig;
use anyhow::anyhow;
use chrono::NaiveDate;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use uuid::Uuid;

/// Smallest page index accepted after clamping.
const MIN_PAGE: i64 = 0;
/// Largest page index accepted after clamping.
const MAX_PAGE: i64 = 10_000;
/// Smallest page size accepted after clamping.
const MIN_SIZE: i64 = 1;
/// Largest page size accepted after clamping.
const MAX_SIZE: i64 = 100;
/// Page size used when a listing tool doesn't ask for one.
const DEFAULT_PAGE_SIZE: i64 = 10;
/// The chaos manager pages larger by default.
const CHAOS_PAGE_SIZE: i64 = 20;

/// Failure of one tool invocation, split into the two MCP error channels.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Caller-facing failure (bad parameters, validation, invalid scope).
    /// Reported inside the tool result with `isError: true`.
    #[error("{0}")]
    Invalid(String),

    /// Unexpected failure (transport, non-2xx upstream, marshalling).
    /// Reported as a JSON-RPC internal error.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ScopeError> for ToolError {
    fn from(err: ScopeError) -> Self {
        Self::Invalid(err.to_string())
    }
}

impl From<ClientError> for ToolError {
    fn from(err: ClientError) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

/// Handles MCP tool calls
pub struct ToolHandler {
    services: Arc<Services>,
    config: Arc<HarnessConfig>,
}

impl ToolHandler {
    pub fn new(services: Arc<Services>, config: Arc<HarnessConfig>) -> Self {
        Self { services, config }
    }

    fn chaos(&self) -> &chaos::ChaosClient {
        &self.services.chaos
    }

    fn principal(&self) -> &principal::PrincipalClient {
        &self.services.principal
    }

    fn acl(&self) -> &acl::AclClient {
        &self.services.acl
    }

    fn resource_groups(&self) -> &resourcegroup::ResourceGroupClient {
        &self.services.resource_groups
    }

    fn secrets(&self) -> &secrets::SecretsClient {
        &self.services.secrets
    }

    fn delegates(&self) -> &delegate::DelegateTokenClient {
        &self.services.delegates
    }

    fn templates(&self) -> &template::TemplateClient {
        &self.services.templates
    }

    fn loadtest(&self) -> &loadtest::LoadTestClient {
        &self.services.loadtest
    }

    fn sei(&self) -> &sei::SeiClient {
        &self.services.sei
    }

    fn sto(&self) -> &sto::StoClient {
        &self.services.sto
    }

    fn scs(&self) -> &scs::ScsClient {
        &self.services.scs
    }

    /// Handle a tool call and return the result as JSON
    pub async fn handle(&self, name: &str, args: Option<Value>) -> Result<Value, ToolError> {
        let args = args.unwrap_or(json!({}));

        match name {
            // Chaos
            "chaos_experiments_list" => self.chaos_experiments_list(args).await,
            "chaos_experiment_get" => self.chaos_experiment_get(args).await,
            "chaos_experiment_run" => self.chaos_experiment_run(args).await,
            "chaos_experiment_runs_list" => self.chaos_experiment_runs_list(args).await,

            // Users
            "get_all_users" => self.get_all_users(args).await,
            "get_user_info" => self.get_user_info(args).await,
            "invite_users" => self.invite_users(args).await,

            // Roles
            "list_roles" => self.list_roles(args).await,
            "get_role" => self.get_role(args).await,
            "create_role_assignments" => self.create_role_assignments(args).await,

            // Resource groups
            "list_resource_groups" => self.list_resource_groups(args).await,
            "get_resource_group" => self.get_resource_group(args).await,
            "create_resource_group" => self.create_resource_group(args).await,

            // Secrets
            "list_secrets" => self.list_secrets(args).await,
            "get_secret" => self.get_secret(args).await,

            // Delegate tokens
            "list_delegate_tokens" => self.list_delegate_tokens(args).await,
            "create_delegate_token" => self.create_delegate_token(args).await,
            "revoke_delegate_token" => self.revoke_delegate_token(args).await,

            // Templates
            "list_templates" => self.list_templates(args).await,
            "get_template" => self.get_template(args).await,

            // Load testing
            "list_load_tests" => self.list_load_tests(args).await,
            "get_load_test_report" => self.get_load_test_report(args).await,

            // SEI
            "sei_lead_time_summary" => self.sei_lead_time_summary(args).await,
            "sei_deployment_frequency" => self.sei_deployment_frequency(args).await,

            // STO
            "list_sto_issues" => self.list_sto_issues(args).await,
            "get_sto_issue" => self.get_sto_issue(args).await,

            // SCS
            "list_scs_code_repos" => self.list_scs_code_repos(args).await,
            "list_scs_artifacts" => self.list_scs_artifacts(args).await,
            "fetch_compliance_results_by_artifact" => {
                self.fetch_compliance_results_by_artifact(args).await
            }
            "list_artifact_sources" => self.list_artifact_sources(args).await,

            _ => Err(ToolError::Internal(anyhow!("Unknown tool: {}", name))),
        }
    }

    // ========================================================================
    // Chaos Handlers
    // ========================================================================

    async fn chaos_experiments_list(&self, args: Value) -> Result<Value, ToolError> {
        let a: ScopedPageArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        let (page, size) = pagination(a.page, a.size, CHAOS_PAGE_SIZE);
        Ok(self.chaos().list_experiments(&scope, page, size).await?)
    }

    async fn chaos_experiment_get(&self, args: Value) -> Result<Value, ToolError> {
        let a: ExperimentArgs = decode_args(args)?;
        require_uuid("experiment_id", &a.experiment_id)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        Ok(self.chaos().get_experiment(&scope, &a.experiment_id).await?)
    }

    async fn chaos_experiment_run(&self, args: Value) -> Result<Value, ToolError> {
        let a: RunExperimentArgs = decode_args(args)?;
        require_uuid("experiment_id", &a.experiment_id)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;

        // Precondition: the experiment's declared variables must all be
        // covered by the supplied runtime values.
        let declared = self
            .chaos()
            .list_experiment_variables(&scope, &a.experiment_id)
            .await?;
        let all_supplied = declared
            .iter()
            .all(|variable| a.runtime_values.contains_key(&variable.name));
        if !all_supplied {
            return Err(ToolError::Invalid(
                "all experiment variables must be given a runtime value".to_string(),
            ));
        }

        let body = chaos::RunExperimentRequest {
            runtime_values: a.runtime_values,
            notify: a.notify,
        };
        Ok(self
            .chaos()
            .run_experiment(&scope, &a.experiment_id, &body)
            .await?)
    }

    async fn chaos_experiment_runs_list(&self, args: Value) -> Result<Value, ToolError> {
        let a: ExperimentPageArgs = decode_args(args)?;
        require_uuid("experiment_id", &a.experiment_id)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        let (page, size) = pagination(a.page, a.size, CHAOS_PAGE_SIZE);
        Ok(self
            .chaos()
            .list_experiment_runs(&scope, &a.experiment_id, page, size)
            .await?)
    }

    // ========================================================================
    // User Handlers
    // ========================================================================

    async fn get_all_users(&self, args: Value) -> Result<Value, ToolError> {
        let a: SearchPageArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);
        Ok(self
            .principal()
            .list_users(&scope, a.search_term.as_deref(), page, size)
            .await?)
    }

    async fn get_user_info(&self, args: Value) -> Result<Value, ToolError> {
        let _: EmptyArgs = decode_args(args)?;
        let scope = Scope::account_only(&self.config);
        Ok(self.principal().get_current_user(&scope).await?)
    }

    async fn invite_users(&self, args: Value) -> Result<Value, ToolError> {
        let a: InviteUsersArgs = decode_args(args)?;
        if a.emails.is_empty() {
            return Err(ToolError::Invalid("emails must not be empty".to_string()));
        }
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;

        let role_bindings = a
            .role_bindings
            .into_iter()
            .map(|binding| principal::RoleBinding {
                role_identifier: binding.role_identifier,
                resource_group_identifier: binding.resource_group_identifier,
                managed_role: binding.managed_role,
            })
            .collect();
        let invite = principal::UserInviteRequest {
            emails: a.emails,
            role_bindings,
        };
        Ok(self.principal().invite_users(&scope, &invite).await?)
    }

    // ========================================================================
    // Role Handlers
    // ========================================================================

    async fn list_roles(&self, args: Value) -> Result<Value, ToolError> {
        let a: SearchPageArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);
        Ok(self
            .acl()
            .list_roles(&scope, a.search_term.as_deref(), page, size)
            .await?)
    }

    async fn get_role(&self, args: Value) -> Result<Value, ToolError> {
        let a: RoleArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        Ok(self.acl().get_role(&scope, &a.role_id).await?)
    }

    async fn create_role_assignments(&self, args: Value) -> Result<Value, ToolError> {
        let a: CreateRoleAssignmentsArgs = decode_args(args)?;
        if a.assignments.is_empty() {
            return Err(ToolError::Invalid(
                "assignments must not be empty".to_string(),
            ));
        }
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;

        let assignments: Vec<acl::RoleAssignment> = a
            .assignments
            .into_iter()
            .map(|assignment| acl::RoleAssignment {
                resource_group_identifier: assignment.resource_group_identifier,
                role_identifier: assignment.role_identifier,
                principal: acl::Principal {
                    identifier: assignment.principal.identifier,
                    principal_type: assignment.principal.principal_type,
                    scope_level: assignment.principal.scope_level,
                },
                disabled: None,
            })
            .collect();
        Ok(self
            .acl()
            .create_role_assignments(&scope, &assignments)
            .await?)
    }

    // ========================================================================
    // Resource Group Handlers
    // ========================================================================

    async fn list_resource_groups(&self, args: Value) -> Result<Value, ToolError> {
        let a: SearchPageArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);
        Ok(self
            .resource_groups()
            .list_resource_groups(&scope, a.search_term.as_deref(), page, size)
            .await?)
    }

    async fn get_resource_group(&self, args: Value) -> Result<Value, ToolError> {
        let a: ResourceGroupArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        Ok(self
            .resource_groups()
            .get_resource_group(&scope, &a.resource_group_id)
            .await?)
    }

    async fn create_resource_group(&self, args: Value) -> Result<Value, ToolError> {
        let a: CreateResourceGroupArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;

        let identifier = match a.identifier {
            Some(identifier) => {
                if !identifier_regex().is_match(&identifier) {
                    return Err(ToolError::Invalid(format!(
                        "identifier '{}' may only contain letters, digits, '-' and '_', and must not start with a digit",
                        identifier
                    )));
                }
                identifier
            }
            None => {
                let derived = generate_identity(&a.name);
                if derived.is_empty() {
                    return Err(ToolError::Invalid(
                        "name must contain at least one alphanumeric character".to_string(),
                    ));
                }
                derived
            }
        };

        let included_scopes = a
            .included_scopes
            .into_iter()
            .map(|included| resourcegroup::IncludedScope {
                account_identifier: scope.account_id.clone(),
                org_identifier: included.org_id,
                project_identifier: included.project_id,
                filter: included.filter,
            })
            .collect();

        let resource_filter = if a.resource_types.is_empty() {
            resourcegroup::ResourceFilter {
                include_all_resources: true,
                resources: vec![],
            }
        } else {
            resourcegroup::ResourceFilter {
                include_all_resources: false,
                resources: a
                    .resource_types
                    .into_iter()
                    .map(|resource_type| resourcegroup::ResourceSelector {
                        resource_type,
                        identifiers: vec![],
                    })
                    .collect(),
            }
        };

        let body = resourcegroup::ResourceGroupRequest {
            resource_group: resourcegroup::ResourceGroup {
                identifier,
                name: a.name,
                description: a.description,
                account_identifier: scope.account_id.clone(),
                org_identifier: scope.org_id.clone(),
                project_identifier: scope.project_id.clone(),
                included_scopes,
                resource_filter: Some(resource_filter),
            },
        };
        Ok(self
            .resource_groups()
            .create_resource_group(&scope, &body)
            .await?)
    }

    // ========================================================================
    // Secret Handlers
    // ========================================================================

    async fn list_secrets(&self, args: Value) -> Result<Value, ToolError> {
        let a: ListSecretsArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);
        Ok(self
            .secrets()
            .list_secrets(&scope, a.secret_type, a.search_term.as_deref(), page, size)
            .await?)
    }

    async fn get_secret(&self, args: Value) -> Result<Value, ToolError> {
        let a: SecretArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        Ok(self.secrets().get_secret(&scope, &a.secret_id).await?)
    }

    // ========================================================================
    // Delegate Token Handlers
    // ========================================================================

    async fn list_delegate_tokens(&self, args: Value) -> Result<Value, ToolError> {
        let a: ListDelegateTokensArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        Ok(self.delegates().list_tokens(&scope, a.status).await?)
    }

    async fn create_delegate_token(&self, args: Value) -> Result<Value, ToolError> {
        let a: TokenNameArgs = decode_args(args)?;
        if !identifier_regex().is_match(&a.token_name) {
            return Err(ToolError::Invalid(format!(
                "token_name '{}' may only contain letters, digits, '-' and '_', and must not start with a digit",
                a.token_name
            )));
        }
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        Ok(self.delegates().create_token(&scope, &a.token_name).await?)
    }

    async fn revoke_delegate_token(&self, args: Value) -> Result<Value, ToolError> {
        let a: TokenNameArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        Ok(self.delegates().revoke_token(&scope, &a.token_name).await?)
    }

    // ========================================================================
    // Template Handlers
    // ========================================================================

    async fn list_templates(&self, args: Value) -> Result<Value, ToolError> {
        let a: ListTemplatesArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);
        Ok(self
            .templates()
            .list_templates(&scope, a.template_type, a.search_term.as_deref(), page, size)
            .await?)
    }

    async fn get_template(&self, args: Value) -> Result<Value, ToolError> {
        let a: TemplateArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, false)?;
        Ok(self
            .templates()
            .get_template(&scope, &a.template_id, a.version_label.as_deref())
            .await?)
    }

    // ========================================================================
    // Load Testing Handlers
    // ========================================================================

    async fn list_load_tests(&self, args: Value) -> Result<Value, ToolError> {
        let a: ScopedPageArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);
        Ok(self.loadtest().list_tests(&scope, page, size).await?)
    }

    async fn get_load_test_report(&self, args: Value) -> Result<Value, ToolError> {
        let a: LoadTestArgs = decode_args(args)?;
        require_uuid("test_id", &a.test_id)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        Ok(self.loadtest().get_test_report(&scope, &a.test_id).await?)
    }

    // ========================================================================
    // SEI Handlers
    // ========================================================================

    async fn sei_lead_time_summary(&self, args: Value) -> Result<Value, ToolError> {
        let a: InsightArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id.clone(), a.project_id.clone(), false)?;
        let filter = build_insight_filter(a)?;
        Ok(self.sei().lead_time_summary(&scope, &filter).await?)
    }

    async fn sei_deployment_frequency(&self, args: Value) -> Result<Value, ToolError> {
        let a: InsightArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id.clone(), a.project_id.clone(), false)?;
        let filter = build_insight_filter(a)?;
        Ok(self.sei().deployment_frequency(&scope, &filter).await?)
    }

    // ========================================================================
    // STO Handlers
    // ========================================================================

    async fn list_sto_issues(&self, args: Value) -> Result<Value, ToolError> {
        let a: ListStoIssuesArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);
        let filter = sto::IssueFilter {
            severity: a.severity,
            target_id: a.target_id,
            scan_id: a.scan_id,
            exemption_status: a.exemption_status,
        };
        Ok(self.sto().list_issues(&scope, &filter, page, size).await?)
    }

    async fn get_sto_issue(&self, args: Value) -> Result<Value, ToolError> {
        let a: StoIssueArgs = decode_args(args)?;
        require_uuid("issue_id", &a.issue_id)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        Ok(self.sto().get_issue(&scope, &a.issue_id).await?)
    }

    // ========================================================================
    // SCS Handlers
    // ========================================================================

    async fn list_scs_code_repos(&self, args: Value) -> Result<Value, ToolError> {
        let a: ListCodeReposArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);

        let mut filter = scs::CodeRepoFilter {
            search_term: a.search_term,
            dependency_type: a.dependency_type,
            ..Default::default()
        };
        if let Some(raw) = a.components {
            filter.component_filter = decode_component_filters(raw)?;
        }
        if let Some(raw) = a.license {
            filter.license_filter = Some(decode_license_filter(raw)?);
        }

        Ok(self
            .scs()
            .list_code_repos(&scope, &filter, page, size)
            .await?)
    }

    async fn list_scs_artifacts(&self, args: Value) -> Result<Value, ToolError> {
        let a: ListArtifactsArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);

        let mut filter = scs::ArtifactListingFilter {
            search_term: a.search_term,
            environment_type: a.environment_type,
            policy_violation: a.policy_violation,
            ..Default::default()
        };
        if let Some(raw) = a.components {
            filter.component_filter = decode_component_filters(raw)?;
        }
        if let Some(raw) = a.license {
            filter.license_filter = Some(decode_license_filter(raw)?);
        }

        let listing = self.scs().list_artifacts(&scope, &filter, page, size).await?;

        // Denormalize each artifact with its security counts so the caller
        // gets one flat table instead of three nested summaries.
        let artifacts: Vec<Value> = listing
            .content
            .iter()
            .map(|artifact| {
                let vuln = artifact.vulnerability_summary.clone().unwrap_or_default();
                let compliance = artifact.compliance_summary.clone().unwrap_or_default();
                json!({
                    "id": artifact.id,
                    "artifact": artifact.name,
                    "tag": artifact.tag,
                    "url": artifact.url,
                    "critical": vuln.critical,
                    "high": vuln.high,
                    "medium": vuln.medium,
                    "low": vuln.low,
                    "compliance_pass": compliance.pass_count,
                    "compliance_fail": compliance.fail_count,
                })
            })
            .collect();

        Ok(json!({
            "artifacts": artifacts,
            "page": page,
            "size": size,
            "total_items": listing.total_items,
            "total_pages": listing.total_pages,
        }))
    }

    async fn fetch_compliance_results_by_artifact(&self, args: Value) -> Result<Value, ToolError> {
        let a: ComplianceResultsArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);

        let filter = scs::ComplianceFilter {
            search_term: a.search_term,
            standards: a.standards,
            severity: a.severity,
        };
        Ok(self
            .scs()
            .compliance_results_by_artifact(&scope, &a.artifact_id, &filter, page, size)
            .await?)
    }

    async fn list_artifact_sources(&self, args: Value) -> Result<Value, ToolError> {
        let a: ScopedPageArgs = decode_args(args)?;
        let scope = Scope::resolve(&self.config, a.org_id, a.project_id, true)?;
        let (page, size) = pagination(a.page, a.size, DEFAULT_PAGE_SIZE);

        let listing = self.scs().list_artifact_sources(&scope, page, size).await?;

        // Enrich each source with its latest artifact, one call per source.
        // A failed detail fetch skips the source; the result list may be
        // shorter than the source list.
        let mut sources = Vec::new();
        for source in &listing.sources {
            match self
                .scs()
                .get_artifact_source_details(&scope, &source.id)
                .await
            {
                Ok(details) => sources.push(json!({
                    "id": source.id,
                    "name": source.name,
                    "url": source.url,
                    "latest_artifact": details,
                })),
                Err(err) => {
                    tracing::warn!(
                        source_id = %source.id,
                        "Skipping artifact source, detail fetch failed: {}",
                        err
                    );
                }
            }
        }

        Ok(json!({
            "sources": sources,
            "total_items": listing.total_items,
        }))
    }
}

// ============================================================================
// Request structs
// ============================================================================

/// Tools that take no arguments still decode, so stray arguments are ignored
/// uniformly.
#[derive(Debug, Deserialize)]
struct EmptyArgs {}

#[derive(Debug, Deserialize)]
struct ScopedPageArgs {
    org_id: Option<String>,
    project_id: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct SearchPageArgs {
    search_term: Option<String>,
    org_id: Option<String>,
    project_id: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ExperimentArgs {
    experiment_id: String,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExperimentPageArgs {
    experiment_id: String,
    org_id: Option<String>,
    project_id: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RunExperimentArgs {
    experiment_id: String,
    #[serde(default)]
    runtime_values: HashMap<String, String>,
    notify: Option<bool>,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InviteUsersArgs {
    emails: Vec<String>,
    #[serde(default)]
    role_bindings: Vec<RoleBindingInput>,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RoleBindingInput {
    role_identifier: String,
    resource_group_identifier: String,
    managed_role: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RoleArgs {
    role_id: String,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateRoleAssignmentsArgs {
    assignments: Vec<RoleAssignmentInput>,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RoleAssignmentInput {
    resource_group_identifier: String,
    role_identifier: String,
    principal: PrincipalInput,
}

#[derive(Debug, Deserialize)]
struct PrincipalInput {
    identifier: String,
    #[serde(rename = "type")]
    principal_type: acl::PrincipalType,
    scope_level: Option<acl::ScopeLevel>,
}

#[derive(Debug, Deserialize)]
struct ResourceGroupArgs {
    resource_group_id: String,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateResourceGroupArgs {
    name: String,
    identifier: Option<String>,
    description: Option<String>,
    #[serde(default)]
    included_scopes: Vec<IncludedScopeInput>,
    #[serde(default)]
    resource_types: Vec<String>,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IncludedScopeInput {
    org_id: Option<String>,
    project_id: Option<String>,
    filter: resourcegroup::ScopeFilter,
}

#[derive(Debug, Deserialize)]
struct ListSecretsArgs {
    secret_type: Option<secrets::SecretType>,
    search_term: Option<String>,
    org_id: Option<String>,
    project_id: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct SecretArgs {
    secret_id: String,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListDelegateTokensArgs {
    status: Option<delegate::TokenStatus>,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenNameArgs {
    token_name: String,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListTemplatesArgs {
    template_type: Option<template::TemplateKind>,
    search_term: Option<String>,
    org_id: Option<String>,
    project_id: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TemplateArgs {
    template_id: String,
    version_label: Option<String>,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoadTestArgs {
    test_id: String,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InsightArgs {
    team_ref_id: Option<String>,
    date_start: Option<String>,
    date_end: Option<String>,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListStoIssuesArgs {
    severity: Option<sto::Severity>,
    target_id: Option<String>,
    scan_id: Option<String>,
    exemption_status: Option<sto::ExemptionStatus>,
    org_id: Option<String>,
    project_id: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StoIssueArgs {
    issue_id: String,
    org_id: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListCodeReposArgs {
    search_term: Option<String>,
    components: Option<Value>,
    license: Option<Value>,
    dependency_type: Option<scs::DependencyType>,
    org_id: Option<String>,
    project_id: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ListArtifactsArgs {
    search_term: Option<String>,
    components: Option<Value>,
    license: Option<Value>,
    environment_type: Option<scs::EnvironmentType>,
    policy_violation: Option<String>,
    org_id: Option<String>,
    project_id: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ComplianceResultsArgs {
    artifact_id: String,
    #[serde(default)]
    standards: Vec<scs::ComplianceStandard>,
    severity: Option<scs::ComplianceSeverity>,
    search_term: Option<String>,
    org_id: Option<String>,
    project_id: Option<String>,
    page: Option<i64>,
    size: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ComponentFilterInput {
    field: scs::ComponentField,
    operator: scs::FilterOperator,
    value: String,
}

#[derive(Debug, Deserialize)]
struct LicenseFilterInput {
    operator: scs::FilterOperator,
    value: String,
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the SEI filter body, validating the date window format.
fn build_insight_filter(a: InsightArgs) -> Result<sei::InsightFilter, ToolError> {
    if let Some(date) = &a.date_start {
        require_date("date_start", date)?;
    }
    if let Some(date) = &a.date_end {
        require_date("date_end", date)?;
    }
    Ok(sei::InsightFilter {
        team_ref_id: a.team_ref_id,
        date_start: a.date_start,
        date_end: a.date_end,
    })
}

/// Decode the `components` filter array, naming the field on failure.
fn decode_component_filters(raw: Value) -> Result<Vec<scs::ComponentFilter>, ToolError> {
    let inputs: Vec<ComponentFilterInput> = decode_field("components", raw)?;
    Ok(inputs
        .into_iter()
        .map(|component| scs::ComponentFilter {
            field_name: component.field,
            operator: component.operator,
            value: component.value,
        })
        .collect())
}

/// Decode the `license` filter object, naming the field on failure.
fn decode_license_filter(raw: Value) -> Result<scs::LicenseFilter, ToolError> {
    let input: LicenseFilterInput = decode_field("license", raw)?;
    Ok(scs::LicenseFilter {
        operator: input.operator,
        value: input.value,
    })
}

/// Decode a tool's argument object into its typed request struct.
///
/// serde names the offending field in its message ("missing field `x`",
/// "unknown variant `y`"), which is exactly what the caller needs to see.
fn decode_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|e| ToolError::Invalid(e.to_string()))
}

/// Decode one nested field, prefixing errors with the field name.
fn decode_field<T: DeserializeOwned>(field: &str, value: Value) -> Result<T, ToolError> {
    serde_json::from_value(value).map_err(|e| ToolError::Invalid(format!("{}: {}", field, e)))
}

/// Clamp page/size into their configured bands. Never fails: out-of-band
/// values are pulled to the nearest bound.
fn pagination(page: Option<i64>, size: Option<i64>, default_size: i64) -> (u64, u64) {
    let page = page.unwrap_or(MIN_PAGE).clamp(MIN_PAGE, MAX_PAGE);
    let size = size.unwrap_or(default_size).clamp(MIN_SIZE, MAX_SIZE);
    (page as u64, size as u64)
}

/// Reject values that don't parse as a UUID.
fn require_uuid(field: &str, value: &str) -> Result<(), ToolError> {
    if Uuid::parse_str(value).is_err() {
        return Err(ToolError::Invalid(format!("{} must be a valid UUID", field)));
    }
    Ok(())
}

/// Reject values that don't parse as a YYYY-MM-DD date.
fn require_date(field: &str, value: &str) -> Result<(), ToolError> {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err(ToolError::Invalid(format!(
            "{} must be a date formatted YYYY-MM-DD",
            field
        )));
    }
    Ok(())
}

/// Harness identifier shape for caller-supplied identifiers.
fn identifier_regex() -> &'static Regex {
    static IDENTIFIER_RE: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("identifier pattern is valid"))
}

/// Derive an identifier from a display name: lowercase, runs of
/// non-alphanumeric characters collapse to single hyphens, no leading or
/// trailing hyphen.
fn generate_identity(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
