//! STO (Security Testing Orchestration) client

use super::{ClientError, RestClient, Scope};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_PREFIX: &str = "sto/api";

/// Client for the STO service.
#[derive(Clone)]
pub struct StoClient {
    rest: RestClient,
}

impl StoClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List security issues matching the filter.
    pub async fn list_issues(
        &self,
        scope: &Scope,
        filter: &IssueFilter,
        page: u64,
        size: u64,
    ) -> Result<Value, ClientError> {
        let query = [
            ("page".to_string(), page.to_string()),
            ("pageSize".to_string(), size.to_string()),
        ];
        self.rest
            .post(&format!("{API_PREFIX}/v2/issues/list"), scope, &query, filter)
            .await
    }

    /// Fetch one issue with occurrence details.
    pub async fn get_issue(&self, scope: &Scope, issue_id: &str) -> Result<Value, ClientError> {
        let path = format!("{API_PREFIX}/v2/issues/{}", urlencoding::encode(issue_id));
        self.rest.get(&path, scope, &[]).await
    }
}

/// Filter body for issue listings. Absent fields are omitted.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_status: Option<ExemptionStatus>,
}

/// Issue severity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

/// Exemption workflow states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExemptionStatus {
    None,
    Pending,
    Approved,
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_filter_skips_absent_fields() {
        let json = serde_json::to_value(IssueFilter::default()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn test_issue_filter_wire_shape() {
        let filter = IssueFilter {
            severity: Some(Severity::Critical),
            target_id: Some("target-1".to_string()),
            scan_id: None,
            exemption_status: Some(ExemptionStatus::Pending),
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["severity"], "Critical");
        assert_eq!(json["targetId"], "target-1");
        assert_eq!(json["exemptionStatus"], "Pending");
        assert!(json.get("scanId").is_none());
    }

    #[test]
    fn test_severity_rejects_unknown_band() {
        let err = serde_json::from_value::<Severity>(json!("Blocker")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Blocker"));
        assert!(msg.contains("Critical"));
    }
}
