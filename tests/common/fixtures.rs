//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use permission_resolver::{
    InMemoryTeamStore, Member, Organization, PermissionResolver, PermissionSet, ResolverConfig,
    RoleRegistry, Team,
};
use std::sync::Arc;

/// Organization ID used by every fixture
pub const ORG_ID: &str = "org_test";

/// Factory for organizations
pub struct OrganizationFactory;

impl OrganizationFactory {
    /// Organization holding a single member
    pub fn with_member(member: Member) -> Organization {
        Organization::new(ORG_ID).with_member(member)
    }

    /// Organization holding the given members
    pub fn with_members<I: IntoIterator<Item = Member>>(members: I) -> Organization {
        members
            .into_iter()
            .fold(Organization::new(ORG_ID), Organization::with_member)
    }
}

/// Factory for resolvers backed by an in-memory team store
pub struct ResolverFactory;

impl ResolverFactory {
    /// Resolver with the built-in roles and the given teams
    pub fn with_teams<I: IntoIterator<Item = Team>>(teams: I) -> PermissionResolver {
        let store = InMemoryTeamStore::new();
        for team in teams {
            store.insert(ORG_ID, team);
        }
        PermissionResolver::new(
            Arc::new(RoleRegistry::builtin()),
            Arc::new(store),
            ResolverConfig::default(),
        )
    }

    /// Resolver with the built-in roles and no teams
    pub fn without_teams() -> PermissionResolver {
        Self::with_teams(Vec::new())
    }
}

/// Expansion of a built-in role
pub fn role_permissions(role: &str) -> PermissionSet {
    RoleRegistry::builtin().role_to_permissions(Some(role), &Organization::new(ORG_ID))
}
