//! Role registry core functionality

use crate::core::models::Organization;
use crate::utils::error::{ResolverError, Result};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use super::roles::builtin_roles;
use super::types::{PermissionSet, Role};

/// Catalog of roles available to the resolver
///
/// The registry is an immutable value handed to the resolver; custom roles are
/// added before it is shared.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    /// Role definitions by id
    pub(super) roles: HashMap<String, Role>,
}

impl RoleRegistry {
    /// Registry holding the built-in roles
    pub fn builtin() -> Self {
        let roles: HashMap<String, Role> = builtin_roles()
            .into_iter()
            .map(|role| (role.id.clone(), role))
            .collect();

        info!("Initialized role registry with {} built-in roles", roles.len());
        Self { roles }
    }

    /// Registry without any role; every lookup misses
    pub fn empty() -> Self {
        Self {
            roles: HashMap::new(),
        }
    }

    /// Add or replace a custom role
    pub fn register(&mut self, role: Role) -> Result<()> {
        if role.id.trim().is_empty() {
            return Err(ResolverError::validation("Role id cannot be empty"));
        }

        if role.is_system {
            return Err(ResolverError::conflict("Cannot register system roles"));
        }

        if self.roles.get(&role.id).is_some_and(|existing| existing.is_system) {
            return Err(ResolverError::conflict(format!(
                "Cannot modify system role: {}",
                role.id
            )));
        }

        debug!("Registering custom role: {}", role.id);
        self.roles.insert(role.id.clone(), role);
        Ok(())
    }

    /// Get role by id
    pub fn get(&self, role_id: &str) -> Option<&Role> {
        self.roles.get(role_id)
    }

    /// List all roles, ordered by access level then id
    pub fn roles(&self) -> Vec<&Role> {
        let mut roles: Vec<&Role> = self.roles.values().collect();
        roles.sort_by(|a, b| a.access_level.cmp(&b.access_level).then(a.id.cmp(&b.id)));
        roles
    }

    /// Access level of a role; `None` for an unknown id
    pub fn access_level(&self, role_id: &str) -> Option<u8> {
        self.get(role_id).map(|role| role.access_level)
    }

    /// Whether a role's grants can be restricted to environments
    pub fn is_environment_limitable(&self, role_id: &str) -> bool {
        self.get(role_id).is_some_and(|role| role.environment_limitable)
    }

    /// Registry that applies to an organization
    ///
    /// Every organization shares this registry today.
    pub fn for_organization(&self, organization: &Organization) -> &RoleRegistry {
        debug!(organization_id = %organization.id, "Using shared role registry");
        self
    }

    /// Expand a role into a permission set covering the whole taxonomy
    ///
    /// `self` must already be the registry returned by
    /// [`for_organization`](Self::for_organization); the organization is only
    /// used for diagnostics. A missing or unknown role yields an all-denied set.
    pub fn role_to_permissions(
        &self,
        role_id: Option<&str>,
        organization: &Organization,
    ) -> PermissionSet {
        let Some(role_id) = role_id else {
            return PermissionSet::denied();
        };

        match self.get(role_id) {
            Some(role) => PermissionSet::from_granted(role.permissions.iter().copied()),
            None => {
                warn!(
                    organization_id = %organization.id,
                    "Unknown role '{}', granting no permissions", role_id
                );
                PermissionSet::denied()
            }
        }
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
