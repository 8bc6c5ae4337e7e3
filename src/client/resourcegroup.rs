//! Resource group client

use super::{ClientError, RestClient, Scope};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_PREFIX: &str = "resourcegroup/api";

/// Client for the resource group service.
#[derive(Clone)]
pub struct ResourceGroupClient {
    rest: RestClient,
}

impl ResourceGroupClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List resource groups visible in the scope.
    pub async fn list_resource_groups(
        &self,
        scope: &Scope,
        search_term: Option<&str>,
        page: u64,
        size: u64,
    ) -> Result<Value, ClientError> {
        let mut query = vec![
            ("pageIndex".to_string(), page.to_string()),
            ("pageSize".to_string(), size.to_string()),
        ];
        if let Some(term) = search_term {
            query.push(("searchTerm".to_string(), term.to_string()));
        }
        self.rest
            .get(&format!("{API_PREFIX}/v2/resourcegroup"), scope, &query)
            .await
    }

    /// Fetch one resource group by identifier.
    pub async fn get_resource_group(
        &self,
        scope: &Scope,
        identifier: &str,
    ) -> Result<Value, ClientError> {
        let path = format!(
            "{API_PREFIX}/v2/resourcegroup/{}",
            urlencoding::encode(identifier)
        );
        self.rest.get(&path, scope, &[]).await
    }

    /// Create a resource group.
    pub async fn create_resource_group(
        &self,
        scope: &Scope,
        body: &ResourceGroupRequest,
    ) -> Result<Value, ClientError> {
        self.rest
            .post(&format!("{API_PREFIX}/v2/resourcegroup"), scope, &[], body)
            .await
    }
}

/// Envelope the create endpoint expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupRequest {
    pub resource_group: ResourceGroup,
}

/// A resource group definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroup {
    pub identifier: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub account_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_scopes: Vec<IncludedScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_filter: Option<ResourceFilter>,
}

/// One scope the group spans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludedScope {
    pub account_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_identifier: Option<String>,
    pub filter: ScopeFilter,
}

/// Whether a scope entry spans its child scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeFilter {
    #[serde(rename = "EXCLUDING_CHILD_SCOPES")]
    ExcludingChildScopes,
    #[serde(rename = "INCLUDING_CHILD_SCOPES")]
    IncludingChildScopes,
}

/// Resources the group selects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFilter {
    #[serde(default)]
    pub include_all_resources: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceSelector>,
}

/// One resource type selection, optionally narrowed to identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSelector {
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_group_wire_shape() {
        let request = ResourceGroupRequest {
            resource_group: ResourceGroup {
                identifier: "ci-pipelines".to_string(),
                name: "CI Pipelines".to_string(),
                description: None,
                account_identifier: "acct".to_string(),
                org_identifier: Some("default".to_string()),
                project_identifier: None,
                included_scopes: vec![IncludedScope {
                    account_identifier: "acct".to_string(),
                    org_identifier: Some("default".to_string()),
                    project_identifier: None,
                    filter: ScopeFilter::IncludingChildScopes,
                }],
                resource_filter: Some(ResourceFilter {
                    include_all_resources: false,
                    resources: vec![ResourceSelector {
                        resource_type: "PIPELINE".to_string(),
                        identifiers: vec![],
                    }],
                }),
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        let group = &json["resourceGroup"];
        assert_eq!(group["identifier"], "ci-pipelines");
        assert_eq!(group["includedScopes"][0]["filter"], "INCLUDING_CHILD_SCOPES");
        assert_eq!(
            group["resourceFilter"]["resources"][0]["resourceType"],
            "PIPELINE"
        );
        assert!(group.get("description").is_none());
    }

    #[test]
    fn test_scope_filter_rejects_unknown_variant() {
        let err = serde_json::from_value::<ScopeFilter>(json!("ALL_SCOPES")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ALL_SCOPES"));
        assert!(msg.contains("INCLUDING_CHILD_SCOPES"));
    }
}
