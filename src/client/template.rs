//! Template service client

use super::{ClientError, RestClient, Scope};
use serde::Deserialize;
use serde_json::Value;

const API_PREFIX: &str = "template/api";

/// Client for the template service.
#[derive(Clone)]
pub struct TemplateClient {
    rest: RestClient,
}

impl TemplateClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List templates visible in the scope.
    pub async fn list_templates(
        &self,
        scope: &Scope,
        kind: Option<TemplateKind>,
        search_term: Option<&str>,
        page: u64,
        size: u64,
    ) -> Result<Value, ClientError> {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("size".to_string(), size.to_string()),
            ("templateListType".to_string(), "All".to_string()),
        ];
        if let Some(kind) = kind {
            query.push(("templateType".to_string(), kind.as_str().to_string()));
        }
        if let Some(term) = search_term {
            query.push(("searchTerm".to_string(), term.to_string()));
        }
        self.rest
            .get(&format!("{API_PREFIX}/templates/list"), scope, &query)
            .await
    }

    /// Fetch one template, optionally at a specific version label
    /// (the stable version when omitted).
    pub async fn get_template(
        &self,
        scope: &Scope,
        identifier: &str,
        version_label: Option<&str>,
    ) -> Result<Value, ClientError> {
        let path = format!("{API_PREFIX}/templates/{}", urlencoding::encode(identifier));
        let mut query = Vec::new();
        if let Some(version) = version_label {
            query.push(("versionLabel".to_string(), version.to_string()));
        }
        self.rest.get(&path, scope, &query).await
    }
}

/// Template kinds accepted by the list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TemplateKind {
    Step,
    Stage,
    Pipeline,
    CustomDeployment,
    MonitoredService,
    SecretManager,
}

impl TemplateKind {
    /// Wire name used in the `templateType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Step => "Step",
            Self::Stage => "Stage",
            Self::Pipeline => "Pipeline",
            Self::CustomDeployment => "CustomDeployment",
            Self::MonitoredService => "MonitoredService",
            Self::SecretManager => "SecretManager",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_kind_parses_wire_names() {
        let kind: TemplateKind = serde_json::from_value(json!("Pipeline")).unwrap();
        assert_eq!(kind, TemplateKind::Pipeline);
    }

    #[test]
    fn test_template_kind_rejects_unknown_value() {
        let err = serde_json::from_value::<TemplateKind>(json!("Workflow")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Workflow"));
        assert!(msg.contains("Pipeline"));
    }
}
