//! Load testing client

use super::{ClientError, RestClient, Scope};
use serde_json::Value;

const API_PREFIX: &str = "loadtest/api";

/// Client for the load testing service.
#[derive(Clone)]
pub struct LoadTestClient {
    rest: RestClient,
}

impl LoadTestClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List load tests in the scoped project.
    pub async fn list_tests(
        &self,
        scope: &Scope,
        page: u64,
        size: u64,
    ) -> Result<Value, ClientError> {
        let query = [
            ("page".to_string(), page.to_string()),
            ("size".to_string(), size.to_string()),
        ];
        self.rest
            .get(&format!("{API_PREFIX}/tests"), scope, &query)
            .await
    }

    /// Fetch the latest report of one load test.
    pub async fn get_test_report(
        &self,
        scope: &Scope,
        test_id: &str,
    ) -> Result<Value, ClientError> {
        let path = format!("{API_PREFIX}/tests/{}/report", urlencoding::encode(test_id));
        self.rest.get(&path, scope, &[]).await
    }
}
