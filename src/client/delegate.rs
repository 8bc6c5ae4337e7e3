//! Delegate token client

use super::{ClientError, RestClient, Scope};
use serde::Deserialize;
use serde_json::Value;

const API_PREFIX: &str = "ng/api";

/// Client for delegate token management.
#[derive(Clone)]
pub struct DelegateTokenClient {
    rest: RestClient,
}

impl DelegateTokenClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List delegate tokens, optionally filtered by status.
    pub async fn list_tokens(
        &self,
        scope: &Scope,
        status: Option<TokenStatus>,
    ) -> Result<Value, ClientError> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status".to_string(), status.as_str().to_string()));
        }
        self.rest
            .get(&format!("{API_PREFIX}/delegate-token-ng"), scope, &query)
            .await
    }

    /// Create a new token with the given name.
    pub async fn create_token(&self, scope: &Scope, name: &str) -> Result<Value, ClientError> {
        let query = [("tokenName".to_string(), name.to_string())];
        self.rest
            .post(
                &format!("{API_PREFIX}/delegate-token-ng"),
                scope,
                &query,
                &serde_json::json!({}),
            )
            .await
    }

    /// Revoke a token by name. Revoked tokens stop authenticating delegates
    /// but remain listed with status REVOKED.
    pub async fn revoke_token(&self, scope: &Scope, name: &str) -> Result<Value, ClientError> {
        let query = [("tokenName".to_string(), name.to_string())];
        self.rest
            .put(&format!("{API_PREFIX}/delegate-token-ng"), scope, &query)
            .await
    }
}

/// Delegate token lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TokenStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "REVOKED")]
    Revoked,
}

impl TokenStatus {
    /// Wire name used in the `status` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Revoked => "REVOKED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_status_parses_wire_names() {
        let status: TokenStatus = serde_json::from_value(json!("REVOKED")).unwrap();
        assert_eq!(status, TokenStatus::Revoked);
        assert_eq!(status.as_str(), "REVOKED");
    }

    #[test]
    fn test_token_status_rejects_unknown_value() {
        let err = serde_json::from_value::<TokenStatus>(json!("EXPIRED")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("EXPIRED"));
        assert!(msg.contains("ACTIVE"));
    }
}
