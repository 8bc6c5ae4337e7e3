//! Principal service client (users and invites)

use super::{ClientError, RestClient, Scope};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_PREFIX: &str = "ng/api";

/// Client for the principal (user) service.
#[derive(Clone)]
pub struct PrincipalClient {
    rest: RestClient,
}

impl PrincipalClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Page through users visible in the scope.
    pub async fn list_users(
        &self,
        scope: &Scope,
        search_term: Option<&str>,
        page: u64,
        size: u64,
    ) -> Result<Value, ClientError> {
        let mut query = vec![
            ("pageIndex".to_string(), page.to_string()),
            ("pageSize".to_string(), size.to_string()),
        ];
        if let Some(term) = search_term {
            query.push(("searchTerm".to_string(), term.to_string()));
        }
        self.rest
            .get(&format!("{API_PREFIX}/user/aggregate"), scope, &query)
            .await
    }

    /// The user the configured API key belongs to.
    pub async fn get_current_user(&self, scope: &Scope) -> Result<Value, ClientError> {
        self.rest
            .get(&format!("{API_PREFIX}/user/currentUser"), scope, &[])
            .await
    }

    /// Invite users by email, optionally binding roles at the scope.
    pub async fn invite_users(
        &self,
        scope: &Scope,
        invite: &UserInviteRequest,
    ) -> Result<Value, ClientError> {
        self.rest
            .post(&format!("{API_PREFIX}/user/users"), scope, &[], invite)
            .await
    }
}

/// Body for the invite endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInviteRequest {
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub role_bindings: Vec<RoleBinding>,
}

/// Role bound to an invited user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBinding {
    pub role_identifier: String,
    pub resource_group_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_role: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_body_shape() {
        let invite = UserInviteRequest {
            emails: vec!["dev@example.com".to_string()],
            role_bindings: vec![RoleBinding {
                role_identifier: "_project_viewer".to_string(),
                resource_group_identifier: "_all_project_level_resources".to_string(),
                managed_role: Some(true),
            }],
        };
        let json = serde_json::to_value(&invite).unwrap();
        assert_eq!(json["emails"][0], "dev@example.com");
        assert_eq!(json["roleBindings"][0]["roleIdentifier"], "_project_viewer");
        assert_eq!(json["roleBindings"][0]["managedRole"], true);
    }

    #[test]
    fn test_invite_body_without_bindings_omits_field() {
        let invite = UserInviteRequest {
            emails: vec!["dev@example.com".to_string()],
            role_bindings: vec![],
        };
        let json = serde_json::to_value(&invite).unwrap();
        assert!(json.get("roleBindings").is_none());
    }
}
