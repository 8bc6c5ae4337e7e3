//! Access control client (roles and role assignments)

use super::{ClientError, RestClient, Scope};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const API_PREFIX: &str = "authz/api";

/// Client for the access control service.
#[derive(Clone)]
pub struct AclClient {
    rest: RestClient,
}

impl AclClient {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// List roles visible in the scope.
    pub async fn list_roles(
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
            .get(&format!("{API_PREFIX}/roles"), scope, &query)
            .await
    }

    /// Fetch one role by identifier.
    pub async fn get_role(&self, scope: &Scope, identifier: &str) -> Result<Value, ClientError> {
        let path = format!("{API_PREFIX}/roles/{}", urlencoding::encode(identifier));
        self.rest.get(&path, scope, &[]).await
    }

    /// Create a batch of role assignments in one call.
    pub async fn create_role_assignments(
        &self,
        scope: &Scope,
        assignments: &[RoleAssignment],
    ) -> Result<Value, ClientError> {
        let body = json!({ "roleAssignments": assignments });
        self.rest
            .post(&format!("{API_PREFIX}/roleassignments/multi"), scope, &[], &body)
            .await
    }
}

/// One role assignment: a principal bound to a role over a resource group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub resource_group_identifier: String,
    pub role_identifier: String,
    pub principal: Principal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// The subject of a role assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub identifier: String,
    #[serde(rename = "type")]
    pub principal_type: PrincipalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_level: Option<ScopeLevel>,
}

/// Allowed principal kinds for role assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrincipalType {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "USER_GROUP")]
    UserGroup,
    #[serde(rename = "SERVICE_ACCOUNT")]
    ServiceAccount,
}

/// Scope level at which the principal lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeLevel {
    Account,
    Organization,
    Project,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_assignment_wire_shape() {
        let assignment = RoleAssignment {
            resource_group_identifier: "_all_resources_including_child_scopes".to_string(),
            role_identifier: "_account_viewer".to_string(),
            principal: Principal {
                identifier: "alex".to_string(),
                principal_type: PrincipalType::User,
                scope_level: Some(ScopeLevel::Account),
            },
            disabled: None,
        };
        let json = serde_json::to_value(&assignment).unwrap();
        assert_eq!(json["principal"]["type"], "USER");
        assert_eq!(json["principal"]["scopeLevel"], "account");
        assert_eq!(json["roleIdentifier"], "_account_viewer");
        assert!(json.get("disabled").is_none());
    }

    #[test]
    fn test_principal_type_rejects_unknown_variant() {
        let err = serde_json::from_value::<PrincipalType>(json!("ROBOT")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ROBOT"));
        assert!(msg.contains("USER_GROUP"));
        assert!(msg.contains("SERVICE_ACCOUNT"));
    }

    #[test]
    fn test_scope_level_round_trip() {
        let level: ScopeLevel = serde_json::from_value(json!("organization")).unwrap();
        assert_eq!(level, ScopeLevel::Organization);
        assert_eq!(serde_json::to_value(level).unwrap(), json!("organization"));
    }
}
