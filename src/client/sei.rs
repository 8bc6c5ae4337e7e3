//! SEI (Software Engineering Insights) client

use super::{ClientError, RestClient, Scope};
use serde::Serialize;
use serde_json::Value;

const API_PREFIX: &str = "sei/api";

/// Client for the SEI analytics service.
#[derive(Clone)]
pub struct SeiClient {
    rest: RestClient,
}

impl SeiClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Lead-time summary for a team over a date window.
    pub async fn lead_time_summary(
        &self,
        scope: &Scope,
        filter: &InsightFilter,
    ) -> Result<Value, ClientError> {
        self.rest
            .post(&format!("{API_PREFIX}/insights/lead-time"), scope, &[], filter)
            .await
    }

    /// Deployment frequency for a team over a date window.
    pub async fn deployment_frequency(
        &self,
        scope: &Scope,
        filter: &InsightFilter,
    ) -> Result<Value, ClientError> {
        self.rest
            .post(
                &format!("{API_PREFIX}/insights/deployment-frequency"),
                scope,
                &[],
                filter,
            )
            .await
    }
}

/// Filter body shared by the insight endpoints. Absent fields are omitted
/// from the wire body; the service applies its own defaults.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_ref_id: Option<String>,
    /// Window start, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_start: Option<String>,
    /// Window end, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_serializes_to_empty_object() {
        let json = serde_json::to_value(InsightFilter::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_filter_uses_camel_case_keys() {
        let filter = InsightFilter {
            team_ref_id: Some("team-42".to_string()),
            date_start: Some("2026-01-01".to_string()),
            date_end: Some("2026-01-31".to_string()),
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["teamRefId"], "team-42");
        assert_eq!(json["dateStart"], "2026-01-01");
        assert_eq!(json["dateEnd"], "2026-01-31");
    }
}
