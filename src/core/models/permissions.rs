//! Resolved permission models

use crate::auth::rbac::{Permission, PermissionSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Permissions held in one scope (organization-wide or one project)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopePermissions {
    /// Grant state of every permission
    pub permissions: PermissionSet,
    /// Environments environment-scoped permissions are limited to
    pub environments: Vec<String>,
    /// Whether environment-scoped permissions are limited to `environments`
    pub limit_access_by_environment: bool,
}

impl ScopePermissions {
    /// Whether the permission is granted in this scope
    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.get(permission)
    }
}

/// Effective permissions of a user in an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    /// Organization-wide permissions
    pub global: ScopePermissions,
    /// Permissions per project ID
    pub projects: BTreeMap<String, ScopePermissions>,
}

impl UserPermissions {
    /// Permissions in a project, if the user has a role there
    pub fn project(&self, project_id: &str) -> Option<&ScopePermissions> {
        self.projects.get(project_id)
    }
}
