//! SCS (Software Supply Chain Security) client

use super::{ClientError, RestClient, Scope};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_PREFIX: &str = "ssca/api";

/// Client for the supply-chain security service.
#[derive(Clone)]
pub struct ScsClient {
    rest: RestClient,
}

impl ScsClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List tracked code repositories matching the filter.
    pub async fn list_code_repos(
        &self,
        scope: &Scope,
        filter: &CodeRepoFilter,
        page: u64,
        size: u64,
    ) -> Result<Value, ClientError> {
        let query = [
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), size.to_string()),
        ];
        self.rest
            .post(&format!("{API_PREFIX}/v1/repositories/list"), scope, &query, filter)
            .await
    }

    /// List artifacts matching the filter, with vulnerability and
    /// compliance summaries per artifact.
    pub async fn list_artifacts(
        &self,
        scope: &Scope,
        filter: &ArtifactListingFilter,
        page: u64,
        size: u64,
    ) -> Result<ArtifactListingPage, ClientError> {
        let query = [
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), size.to_string()),
        ];
        let value = self
            .rest
            .post(&format!("{API_PREFIX}/v1/artifacts/list"), scope, &query, filter)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Compliance check results for one artifact.
    pub async fn compliance_results_by_artifact(
        &self,
        scope: &Scope,
        artifact_id: &str,
        filter: &ComplianceFilter,
        page: u64,
        size: u64,
    ) -> Result<Value, ClientError> {
        let path = format!(
            "{API_PREFIX}/v1/artifacts/{}/compliance-results",
            urlencoding::encode(artifact_id)
        );
        let query = [
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), size.to_string()),
        ];
        self.rest.post(&path, scope, &query, filter).await
    }

    /// List artifact sources (registries and repositories feeding artifacts).
    pub async fn list_artifact_sources(
        &self,
        scope: &Scope,
        page: u64,
        size: u64,
    ) -> Result<ArtifactSourcesPage, ClientError> {
        let query = [
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), size.to_string()),
        ];
        let value = self
            .rest
            .get(&format!("{API_PREFIX}/v1/artifact-sources"), scope, &query)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Latest artifact details for one source.
    pub async fn get_artifact_source_details(
        &self,
        scope: &Scope,
        source_id: &str,
    ) -> Result<Value, ClientError> {
        let path = format!(
            "{API_PREFIX}/v1/artifact-sources/{}/latest-artifact",
            urlencoding::encode(source_id)
        );
        self.rest.get(&path, scope, &[]).await
    }
}

// ============================================================================
// Filter bodies
// ============================================================================

/// Filter body for code repository listings.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRepoFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub component_filter: Vec<ComponentFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_filter: Option<LicenseFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_type: Option<DependencyType>,
}

/// Filter body for artifact listings.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactListingFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub component_filter: Vec<ComponentFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_filter: Option<LicenseFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_type: Option<EnvironmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_violation: Option<String>,
}

/// Filter body for compliance result queries.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub standards: Vec<ComplianceStandard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<ComplianceSeverity>,
}

/// One component predicate (name or version against an operator).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFilter {
    pub field_name: ComponentField,
    pub operator: FilterOperator,
    pub value: String,
}

/// Component fields a predicate can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentField {
    ComponentName,
    ComponentVersion,
}

/// License predicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseFilter {
    pub operator: FilterOperator,
    pub value: String,
}

/// Comparison operators understood by the SCS filter endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "EQUALS")]
    Equals,
    #[serde(rename = "CONTAINS")]
    Contains,
    #[serde(rename = "STARTS_WITH")]
    StartsWith,
    #[serde(rename = "NOT_EQUALS")]
    NotEquals,
    #[serde(rename = "GREATER_THAN_EQUALS")]
    GreaterThanEquals,
    #[serde(rename = "LESS_THAN_EQUALS")]
    LessThanEquals,
}

/// Dependency provenance filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DependencyType {
    Direct,
    Transitive,
}

/// Deployment environment filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentType {
    #[serde(rename = "Prod")]
    Prod,
    #[serde(rename = "NonProd")]
    NonProd,
}

/// Compliance standards the service evaluates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStandard {
    CisBenchmarks,
    #[serde(rename = "OWASP_TOP_10")]
    OwaspTop10,
    SlsaFramework,
}

/// Severity bands used by compliance results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceSeverity {
    Critical,
    High,
    Medium,
    Low,
}

// ============================================================================
// Typed listing responses
// ============================================================================

/// One page of the artifact listing, as returned by the service.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactListingPage {
    #[serde(default)]
    pub content: Vec<ArtifactRow>,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u64,
}

/// One artifact row with its security summaries.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub vulnerability_summary: Option<VulnerabilitySummary>,
    #[serde(default)]
    pub compliance_summary: Option<ComplianceSummary>,
}

/// Vulnerability counts per severity band.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilitySummary {
    #[serde(default)]
    pub critical: u64,
    #[serde(default)]
    pub high: u64,
    #[serde(default)]
    pub medium: u64,
    #[serde(default)]
    pub low: u64,
}

/// Compliance check counts.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    #[serde(default)]
    pub pass_count: u64,
    #[serde(default)]
    pub fail_count: u64,
}

/// One page of the artifact-source listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactSourcesPage {
    #[serde(default)]
    pub sources: Vec<ArtifactSource>,
    #[serde(default)]
    pub total_items: u64,
}

/// One artifact source (registry or repository).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactSource {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_repo_filter_skips_absent_fields() {
        let json = serde_json::to_value(CodeRepoFilter::default()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn test_component_filter_wire_shape() {
        let filter = ArtifactListingFilter {
            component_filter: vec![ComponentFilter {
                field_name: ComponentField::ComponentName,
                operator: FilterOperator::Contains,
                value: "log4j".to_string(),
            }],
            license_filter: Some(LicenseFilter {
                operator: FilterOperator::Equals,
                value: "GPL-3.0".to_string(),
            }),
            environment_type: Some(EnvironmentType::Prod),
            ..Default::default()
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["componentFilter"][0]["fieldName"], "componentName");
        assert_eq!(json["componentFilter"][0]["operator"], "CONTAINS");
        assert_eq!(json["licenseFilter"]["value"], "GPL-3.0");
        assert_eq!(json["environmentType"], "Prod");
    }

    #[test]
    fn test_filter_operator_rejects_unknown_operator() {
        let err = serde_json::from_value::<FilterOperator>(json!("MATCHES")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("MATCHES"));
        assert!(msg.contains("EQUALS"));
    }

    #[test]
    fn test_artifact_listing_page_tolerates_sparse_rows() {
        let page: ArtifactListingPage = serde_json::from_value(json!({
            "content": [
                {"id": "a1", "name": "svc/api", "tag": "1.4.2"},
                {"id": "a2", "name": "svc/worker",
                 "vulnerabilitySummary": {"critical": 2, "high": 5}}
            ],
            "totalItems": 2,
            "totalPages": 1
        }))
        .unwrap();

        assert_eq!(page.content.len(), 2);
        assert!(page.content[0].vulnerability_summary.is_none());
        let summary = page.content[1].vulnerability_summary.as_ref().unwrap();
        assert_eq!(summary.critical, 2);
        assert_eq!(summary.medium, 0);
    }

    #[test]
    fn test_compliance_standard_wire_names() {
        assert_eq!(
            serde_json::to_value(ComplianceStandard::CisBenchmarks).unwrap(),
            json!("CIS_BENCHMARKS")
        );
        assert_eq!(
            serde_json::to_value(ComplianceStandard::OwaspTop10).unwrap(),
            json!("OWASP_TOP_10")
        );
    }
}
