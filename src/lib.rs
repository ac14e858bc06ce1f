//! # permission-resolver
//!
//! Computes the effective permissions of a user inside an organization by
//! combining four sources of authority:
//!
//! - **Organization role**: the member's organization-wide role
//! - **Project roles**: per-project role overrides
//! - **Teams**: additional grants from every team the member belongs to
//! - **Taxonomy**: a closed set of permissions scoped globally, per project,
//!   or per deployment environment
//!
//! Permissions only ever accumulate: a team can add to what a member holds but
//! never take anything away. Environment restrictions are merged by role
//! access level, and unrestricted access always beats restricted access.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use permission_resolver::{
//!     InMemoryTeamStore, Member, Organization, Permission, PermissionResolver,
//!     ResolverConfig, RoleRegistry, Team,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let teams = InMemoryTeamStore::new();
//!     teams.insert("org_1", Team::new("platform", "engineer").limited_to(["staging"]));
//!
//!     let org = Organization::new("org_1")
//!         .with_member(Member::new("user_1", "collaborator").with_team("platform"));
//!
//!     let resolver = PermissionResolver::new(
//!         Arc::new(RoleRegistry::builtin()),
//!         Arc::new(teams),
//!         ResolverConfig::default(),
//!     );
//!
//!     let permissions = resolver.resolve("user_1", &org).await?;
//!     assert!(permissions.global.has(Permission::ManageFeatures));
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::rbac::{Permission, PermissionScope, PermissionSet, Role, RoleRegistry};
pub use auth::resolver::{PermissionResolver, ScopeAuthority, merge_scopes};
pub use config::{Config, ResolverConfig, Validate};
pub use crate::core::models::{
    Member, Organization, ProjectMemberRole, ScopePermissions, Team, UserPermissions,
};
pub use storage::{InMemoryTeamStore, TeamStore};
pub use utils::error::{ResolverError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
