//! Scope authority and the scope merger

use crate::auth::rbac::{PermissionSet, RoleRegistry};
use crate::core::models::{Organization, ProjectMemberRole, ScopePermissions};

/// One role-derived permission set with its environment restriction
///
/// The same type carries the organization-wide scope and every project scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeAuthority {
    /// Role directly assigned at this scope, if any
    pub role: Option<String>,
    /// Grant state of every permission
    pub permissions: PermissionSet,
    /// Environments environment-scoped permissions are limited to
    pub environments: Vec<String>,
    /// Whether environment-scoped permissions are limited to `environments`
    pub limit_access_by_environment: bool,
}

impl ScopeAuthority {
    /// Scope without a role and without any grant
    pub fn empty() -> Self {
        Self {
            role: None,
            permissions: PermissionSet::denied(),
            environments: Vec::new(),
            limit_access_by_environment: false,
        }
    }

    /// Scope granted by a role
    pub fn for_role(
        registry: &RoleRegistry,
        organization: &Organization,
        role: &str,
        environments: &[String],
        limit_access_by_environment: bool,
    ) -> Self {
        Self {
            role: Some(role.to_string()),
            permissions: registry.role_to_permissions(Some(role), organization),
            environments: environments.to_vec(),
            limit_access_by_environment,
        }
    }

    /// Scope granted by a project role
    pub fn for_project_role(
        registry: &RoleRegistry,
        organization: &Organization,
        project_role: &ProjectMemberRole,
    ) -> Self {
        Self::for_role(
            registry,
            organization,
            &project_role.role,
            &project_role.environments,
            project_role.limit_access_by_environment,
        )
    }

    /// Drop the role, keeping what is exposed to callers
    pub fn into_permissions(self) -> ScopePermissions {
        ScopePermissions {
            permissions: self.permissions,
            environments: self.environments,
            limit_access_by_environment: self.limit_access_by_environment,
        }
    }
}

/// Merge an incoming (team) scope into an existing one
///
/// Permissions are OR-ed, so nothing granted is ever revoked. The result keeps
/// `existing.role`: callers folding several teams into one scope compare every
/// team against the scope's original role, never against an intermediate one.
pub fn merge_scopes(
    registry: &RoleRegistry,
    existing: &ScopeAuthority,
    incoming: &ScopeAuthority,
) -> ScopeAuthority {
    let (environments, limit_access_by_environment) =
        merge_environments(registry, existing, incoming);

    ScopeAuthority {
        role: existing.role.clone(),
        permissions: existing.permissions.union(&incoming.permissions),
        environments,
        limit_access_by_environment,
    }
}

fn merge_environments(
    registry: &RoleRegistry,
    existing: &ScopeAuthority,
    incoming: &ScopeAuthority,
) -> (Vec<String>, bool) {
    let Some(existing_role) = existing.role.as_deref() else {
        return (
            incoming.environments.clone(),
            incoming.limit_access_by_environment,
        );
    };
    let incoming_role = incoming.role.as_deref();

    // Unrestricted access on either side wins over any restriction.
    if !existing.limit_access_by_environment || !incoming.limit_access_by_environment {
        return (Vec::new(), false);
    }

    let both_limitable = registry.is_environment_limitable(existing_role)
        && incoming_role.is_some_and(|role| registry.is_environment_limitable(role));
    if both_limitable {
        return (
            union_environments(&existing.environments, &incoming.environments),
            true,
        );
    }

    // Unknown roles have no level and never outrank a known one; ties keep existing.
    let existing_level = registry.access_level(existing_role);
    let incoming_level = incoming_role.and_then(|role| registry.access_level(role));
    if incoming_level > existing_level {
        (incoming.environments.clone(), true)
    } else {
        (existing.environments.clone(), true)
    }
}

/// Existing environments followed by the incoming ones not already present
fn union_environments(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(existing.len() + incoming.len());
    for environment in existing.iter().chain(incoming) {
        if !merged.contains(environment) {
            merged.push(environment.clone());
        }
    }
    merged
}
