//! Harness MCP Server
//!
//! An MCP server that exposes Harness platform operations as tools:
//! - Chaos engineering (experiments, runs, runtime variables)
//! - Access control (users, invites, roles, role assignments, resource groups)
//! - Secrets, delegate tokens, templates
//! - STO security issues, SCS supply-chain artifacts, SEI insights
//! - Load testing
//!
//! Every tool is a thin adapter: decode parameters, resolve the
//! account/org/project scope, call one Harness REST endpoint, marshal the
//! JSON response back to the MCP client.

pub mod client;
pub mod mcp;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub harness: HarnessYamlConfig,
}

/// Harness connection section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarnessYamlConfig {
    pub base_url: String,
    pub default_org_id: Option<String>,
    pub default_project_id: Option<String>,
}

impl Default for HarnessYamlConfig {
    fn default() -> Self {
        Self {
            base_url: "https://app.harness.io".into(),
            default_org_id: None,
            default_project_id: None,
        }
    }
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Application configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Harness API gateway base URL
    pub base_url: String,
    /// API key sent as `x-api-key` on every call
    pub api_key: String,
    /// Account identifier, derived from the API key
    pub account_id: String,
    /// Org used when a request doesn't supply one
    pub default_org_id: Option<String>,
    /// Project used when a request doesn't supply one
    pub default_project_id: Option<String>,
}

impl HarnessConfig {
    /// Load configuration from environment variables only.
    /// Equivalent to `from_yaml_and_env(None)`.
    pub fn from_env() -> Result<Self> {
        Self::from_yaml_and_env(None)
    }

    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// The API key is env-only (`HARNESS_API_KEY`) — it never lives in the
    /// YAML file. If `yaml_path` is None, tries "config.yaml" in CWD and
    /// falls back to pure env vars / defaults when absent.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self> {
        let yaml = Self::load_yaml(yaml_path);

        let api_key = std::env::var("HARNESS_API_KEY")
            .map_err(|_| anyhow!("HARNESS_API_KEY is not set"))?;
        let account_id = account_id_from_key(&api_key)?;

        Ok(Self {
            base_url: std::env::var("HARNESS_BASE_URL").unwrap_or(yaml.harness.base_url),
            default_org_id: std::env::var("HARNESS_DEFAULT_ORG_ID")
                .ok()
                .or(yaml.harness.default_org_id),
            default_project_id: std::env::var("HARNESS_DEFAULT_PROJECT_ID")
                .ok()
                .or(yaml.harness.default_project_id),
            api_key,
            account_id,
        })
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("config.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }
}

/// Extract the account identifier embedded in a Harness API key.
///
/// Keys look like `pat.<account>.<token_id>.<secret>` for personal access
/// tokens and `sat.<account>.<token_id>.<secret>` for service account tokens.
pub fn account_id_from_key(key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();
    let valid_prefix = matches!(parts.first(), Some(&"pat") | Some(&"sat"));
    if !valid_prefix || parts.len() < 3 || parts[1].is_empty() {
        return Err(anyhow!(
            "HARNESS_API_KEY does not look like a Harness API key (expected pat.<account>.<id>.<secret>)"
        ));
    }
    Ok(parts[1].to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_yaml_config_loading() {
        let yaml = r#"
harness:
  base_url: https://gateway.example.io
  default_org_id: default
  default_project_id: chaos_sandbox
"#;

        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.harness.base_url, "https://gateway.example.io");
        assert_eq!(config.harness.default_org_id.as_deref(), Some("default"));
        assert_eq!(
            config.harness.default_project_id.as_deref(),
            Some("chaos_sandbox")
        );
    }

    #[test]
    fn test_yaml_config_defaults() {
        let config: YamlConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.harness.base_url, "https://app.harness.io");
        assert!(config.harness.default_org_id.is_none());
        assert!(config.harness.default_project_id.is_none());
    }

    #[test]
    fn test_load_yaml_missing_file_falls_back() {
        let config = HarnessConfig::load_yaml(Some(Path::new("/nonexistent/config.yaml")));
        assert_eq!(config.harness.base_url, "https://app.harness.io");
    }

    #[test]
    fn test_load_yaml_malformed_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&file_path).unwrap();
        writeln!(file, "harness: [not, a, mapping").unwrap();

        let config = HarnessConfig::load_yaml(Some(&file_path));
        assert_eq!(config.harness.base_url, "https://app.harness.io");
    }

    #[test]
    fn test_account_id_from_pat_key() {
        let account = account_id_from_key("pat.Ws8zp2LkQ5K7.6a1b2c3d.x9y8z7").unwrap();
        assert_eq!(account, "Ws8zp2LkQ5K7");
    }

    #[test]
    fn test_account_id_from_sat_key() {
        let account = account_id_from_key("sat.myAccount.token.secret").unwrap();
        assert_eq!(account, "myAccount");
    }

    #[test]
    fn test_account_id_rejects_malformed_keys() {
        assert!(account_id_from_key("").is_err());
        assert!(account_id_from_key("not-a-key").is_err());
        assert!(account_id_from_key("pat.").is_err());
        assert!(account_id_from_key("pat..id.secret").is_err());
        assert!(account_id_from_key("jwt.account.id.secret").is_err());
    }
}
