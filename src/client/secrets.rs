//! Secrets client

use super::{ClientError, RestClient, Scope};
use serde::Deserialize;
use serde_json::Value;

const API_PREFIX: &str = "ng/api";

/// Client for the secrets service.
#[derive(Clone)]
pub struct SecretsClient {
    rest: RestClient,
}

impl SecretsClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List secret metadata in the scope. Secret values are never returned.
    pub async fn list_secrets(
        &self,
        scope: &Scope,
        secret_type: Option<SecretType>,
        search_term: Option<&str>,
        page: u64,
        size: u64,
    ) -> Result<Value, ClientError> {
        let mut query = vec![
            ("pageIndex".to_string(), page.to_string()),
            ("pageSize".to_string(), size.to_string()),
        ];
        if let Some(kind) = secret_type {
            query.push(("type".to_string(), kind.as_str().to_string()));
        }
        if let Some(term) = search_term {
            query.push(("searchTerm".to_string(), term.to_string()));
        }
        self.rest
            .get(&format!("{API_PREFIX}/v2/secrets"), scope, &query)
            .await
    }

    /// Fetch one secret's metadata by identifier.
    pub async fn get_secret(&self, scope: &Scope, identifier: &str) -> Result<Value, ClientError> {
        let path = format!("{API_PREFIX}/v2/secrets/{}", urlencoding::encode(identifier));
        self.rest.get(&path, scope, &[]).await
    }
}

/// Secret kinds accepted by the list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SecretType {
    SecretText,
    SecretFile,
    SSHKey,
    WinRmCredentials,
}

impl SecretType {
    /// Wire name used in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SecretText => "SecretText",
            Self::SecretFile => "SecretFile",
            Self::SSHKey => "SSHKey",
            Self::WinRmCredentials => "WinRmCredentials",
        }
    }
}
