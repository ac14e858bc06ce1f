//! Role-Based Access Control (RBAC) system
//!
//! This module holds the permission taxonomy, the role catalog and the
//! expansion of a role id into a full permission set.

mod permissions;
mod roles;
mod system;
mod types;

// Re-export public types and structs
pub use system::RoleRegistry;
pub use types::{Permission, PermissionScope, PermissionSet, Role};
