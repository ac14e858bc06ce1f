//! Permission taxonomy and permission set operations

use crate::utils::error::{ResolverError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::types::{Permission, PermissionScope, PermissionSet};

impl Permission {
    /// Permissions that only exist organization-wide
    pub fn global() -> impl Iterator<Item = Permission> {
        Self::ALL.iter().copied().filter(Permission::is_global)
    }

    /// Permissions that can be granted per project (includes environment scoped ones)
    pub fn project_scoped() -> impl Iterator<Item = Permission> {
        Self::ALL.iter().copied().filter(Permission::is_project_scoped)
    }

    /// Permissions that can be restricted to deployment environments
    pub fn env_scoped() -> impl Iterator<Item = Permission> {
        Self::ALL.iter().copied().filter(Permission::is_env_scoped)
    }

    pub fn is_global(&self) -> bool {
        self.scope() == PermissionScope::Global
    }

    pub fn is_project_scoped(&self) -> bool {
        matches!(
            self.scope(),
            PermissionScope::Project | PermissionScope::Environment
        )
    }

    pub fn is_env_scoped(&self) -> bool {
        self.scope() == PermissionScope::Environment
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| ResolverError::validation(format!("Unknown permission: {}", s)))
    }
}

impl PermissionSet {
    /// Set with every permission denied
    pub fn denied() -> Self {
        Self(Permission::ALL.iter().map(|p| (*p, false)).collect())
    }

    /// Set granting exactly the given permissions
    pub fn from_granted<I: IntoIterator<Item = Permission>>(granted: I) -> Self {
        let mut set = Self::denied();
        for permission in granted {
            set.grant(permission);
        }
        set
    }

    /// Whether the permission is granted
    pub fn get(&self, permission: Permission) -> bool {
        self.0.get(&permission).copied().unwrap_or(false)
    }

    pub fn grant(&mut self, permission: Permission) {
        self.0.insert(permission, true);
    }

    /// Permission-wise OR of two sets
    pub fn union(&self, other: &PermissionSet) -> PermissionSet {
        Self(
            Permission::ALL
                .iter()
                .map(|p| (*p, self.get(*p) || other.get(*p)))
                .collect(),
        )
    }

    /// Granted permissions in taxonomy order
    pub fn granted(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0
            .iter()
            .filter_map(|(permission, granted)| granted.then_some(*permission))
    }

    /// Whether any permission is granted
    pub fn any(&self) -> bool {
        self.0.values().any(|granted| *granted)
    }

    /// Iterate over every `(permission, granted)` pair
    pub fn iter(&self) -> impl Iterator<Item = (Permission, bool)> + '_ {
        self.0.iter().map(|(permission, granted)| (*permission, *granted))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PermissionSet {
    fn default() -> Self {
        Self::denied()
    }
}

impl From<BTreeMap<Permission, bool>> for PermissionSet {
    fn from(map: BTreeMap<Permission, bool>) -> Self {
        let mut set = Self::denied();
        for (permission, granted) in map {
            set.0.insert(permission, granted);
        }
        set
    }
}

impl From<PermissionSet> for BTreeMap<Permission, bool> {
    fn from(set: PermissionSet) -> Self {
        set.0
    }
}
