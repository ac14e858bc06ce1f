//! Core data models
//!
//! Inputs read by the resolver (organizations, members, teams) and the
//! resolved [`UserPermissions`] it produces.

pub mod organization;
pub mod permissions;
pub mod team;


// Re-export commonly used types
pub use organization::{Member, Organization, ProjectMemberRole};
pub use permissions::{ScopePermissions, UserPermissions};
pub use team::Team;
