//! Account/org/project scope resolution
//!
//! Every Harness call is made in a tenant context: the account from the
//! API key, plus an optional org/project pair. Tools resolve the scope
//! once per request from configured defaults and request overrides.

use crate::HarnessConfig;
use serde::Serialize;
use thiserror::Error;

/// Tenant context for one API call.
///
/// Immutable for the duration of a single tool invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scope {
    pub account_id: String,
    pub org_id: Option<String>,
    pub project_id: Option<String>,
}

/// Scope validation failure — always caller-facing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("org_id is required for project/org scope")]
    MissingOrg,
    #[error("project_id is required for project/org scope")]
    MissingProject,
}

impl Scope {
    /// Resolve the effective scope for a request.
    ///
    /// Request-supplied identifiers win over configured defaults. When
    /// `require_project` is set, both org and project must be present after
    /// fallback; otherwise an account-only scope is allowed.
    pub fn resolve(
        config: &HarnessConfig,
        org_id: Option<String>,
        project_id: Option<String>,
        require_project: bool,
    ) -> Result<Self, ScopeError> {
        let org_id = org_id
            .filter(|s| !s.is_empty())
            .or_else(|| config.default_org_id.clone());
        let project_id = project_id
            .filter(|s| !s.is_empty())
            .or_else(|| config.default_project_id.clone());

        if require_project {
            if org_id.is_none() {
                return Err(ScopeError::MissingOrg);
            }
            if project_id.is_none() {
                return Err(ScopeError::MissingProject);
            }
        }

        Ok(Self {
            account_id: config.account_id.clone(),
            org_id,
            project_id,
        })
    }

    /// Account-only scope, ignoring any configured org/project defaults.
    pub fn account_only(config: &HarnessConfig) -> Self {
        Self {
            account_id: config.account_id.clone(),
            org_id: None,
            project_id: None,
        }
    }

    /// The identifier query parameters understood by every Harness service.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("accountIdentifier".to_string(), self.account_id.clone())];
        if let Some(org) = &self.org_id {
            params.push(("orgIdentifier".to_string(), org.clone()));
        }
        if let Some(project) = &self.project_id {
            params.push(("projectIdentifier".to_string(), project.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(org: Option<&str>, project: Option<&str>) -> HarnessConfig {
        HarnessConfig {
            base_url: "https://app.harness.io".into(),
            api_key: "pat.acct.id.secret".into(),
            account_id: "acct".into(),
            default_org_id: org.map(String::from),
            default_project_id: project.map(String::from),
        }
    }

    #[test]
    fn test_request_overrides_win_over_defaults() {
        let cfg = config(Some("default_org"), Some("default_proj"));
        let scope = Scope::resolve(&cfg, Some("my_org".into()), Some("my_proj".into()), true).unwrap();
        assert_eq!(scope.org_id.as_deref(), Some("my_org"));
        assert_eq!(scope.project_id.as_deref(), Some("my_proj"));
        assert_eq!(scope.account_id, "acct");
    }

    #[test]
    fn test_defaults_fill_missing_identifiers() {
        let cfg = config(Some("default_org"), Some("default_proj"));
        let scope = Scope::resolve(&cfg, None, None, true).unwrap();
        assert_eq!(scope.org_id.as_deref(), Some("default_org"));
        assert_eq!(scope.project_id.as_deref(), Some("default_proj"));
    }

    #[test]
    fn test_empty_strings_are_treated_as_absent() {
        let cfg = config(Some("default_org"), None);
        let scope = Scope::resolve(&cfg, Some(String::new()), None, false).unwrap();
        assert_eq!(scope.org_id.as_deref(), Some("default_org"));
        assert!(scope.project_id.is_none());
    }

    #[test]
    fn test_strict_scope_requires_org() {
        let cfg = config(None, None);
        let err = Scope::resolve(&cfg, None, Some("proj".into()), true).unwrap_err();
        assert_eq!(err, ScopeError::MissingOrg);
        assert!(err.to_string().contains("required for project/org scope"));
    }

    #[test]
    fn test_strict_scope_requires_project() {
        let cfg = config(Some("org"), None);
        let err = Scope::resolve(&cfg, None, None, true).unwrap_err();
        assert_eq!(err, ScopeError::MissingProject);
        assert!(err.to_string().contains("required for project/org scope"));
    }

    #[test]
    fn test_account_only_scope_is_allowed_when_not_strict() {
        let cfg = config(None, None);
        let scope = Scope::resolve(&cfg, None, None, false).unwrap();
        assert!(scope.org_id.is_none());
        assert!(scope.project_id.is_none());
    }

    #[test]
    fn test_query_params_include_only_present_identifiers() {
        let cfg = config(Some("org"), None);
        let scope = Scope::resolve(&cfg, None, None, false).unwrap();
        let params = scope.query_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0], ("accountIdentifier".to_string(), "acct".to_string()));
        assert_eq!(params[1], ("orgIdentifier".to_string(), "org".to_string()));
    }
}
