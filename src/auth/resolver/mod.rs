//! Effective permission resolution
//!
//! Combines a member's organization role, project roles and team grants into
//! one [`UserPermissions`](crate::core::models::UserPermissions) value.

mod resolver;
mod scope;
mod teams;

pub use resolver::PermissionResolver;
pub use scope::{ScopeAuthority, merge_scopes};
