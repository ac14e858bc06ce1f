//! Authorization
//!
//! `rbac` owns the permission taxonomy and role catalog; `resolver` merges a
//! member's roles and team grants into effective permissions.

pub mod rbac;
pub mod resolver;
