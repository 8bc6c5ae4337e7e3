//! Shared HTTP plumbing for the Harness REST clients
//!
//! One `RestClient` is built at process start and cloned into every
//! per-service client; all of them share a single connection pool.

use super::{ClientError, Scope};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Timeout applied to every upstream call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper around `reqwest::Client` that adds the `x-api-key` header,
/// scope query parameters, and uniform status/decode handling.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    /// Create a client for the given gateway base URL.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create reqwest client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// GET `path` under the gateway, scoped.
    pub async fn get(
        &self,
        path: &str,
        scope: &Scope,
        query: &[(String, String)],
    ) -> Result<Value, ClientError> {
        let req = self
            .http
            .get(self.url(path))
            .query(&scope.query_params())
            .query(query);
        self.send(req).await
    }

    /// POST `body` as JSON to `path` under the gateway, scoped.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        scope: &Scope,
        query: &[(String, String)],
        body: &B,
    ) -> Result<Value, ClientError> {
        let req = self
            .http
            .post(self.url(path))
            .query(&scope.query_params())
            .query(query)
            .json(body);
        self.send(req).await
    }

    /// PUT to `path` under the gateway, scoped. No body — Harness mutation
    /// endpoints of this shape carry their arguments in the query string.
    pub async fn put(
        &self,
        path: &str,
        scope: &Scope,
        query: &[(String, String)],
    ) -> Result<Value, ClientError> {
        let req = self
            .http
            .put(self.url(path))
            .query(&scope.query_params())
            .query(query);
        self.send(req).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<Value, ClientError> {
        let resp = req.header("x-api-key", &self.api_key).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        // Some mutation endpoints answer 2xx with an empty body.
        let text = resp.text().await?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = RestClient::new("https://app.harness.io/", "pat.a.b.c").unwrap();
        assert_eq!(
            client.url("/ng/api/user/currentUser"),
            "https://app.harness.io/ng/api/user/currentUser"
        );
        assert_eq!(
            client.url("chaos/manager/api/experiments"),
            "https://app.harness.io/chaos/manager/api/experiments"
        );
    }
}
