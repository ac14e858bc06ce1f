//! Resolution over organizations and teams loaded from serialized fixtures

use crate::common::PermissionAssertions;
use crate::common::fixtures::role_permissions;
use permission_resolver::{
    InMemoryTeamStore, Organization, PermissionResolver, ResolverConfig, RoleRegistry, Team,
};
use std::sync::Arc;

const ORGANIZATION: &str = include_str!("../fixtures/organization.json");
const TEAMS: &str = include_str!("../fixtures/teams.yaml");

fn load() -> (Organization, PermissionResolver) {
    let organization: Organization = serde_json::from_str(ORGANIZATION).unwrap();
    let teams: Vec<Team> = serde_yaml::from_str(TEAMS).unwrap();

    let store = InMemoryTeamStore::new();
    for team in teams {
        store.insert(organization.id.clone(), team);
    }

    let resolver = PermissionResolver::new(
        Arc::new(RoleRegistry::builtin()),
        Arc::new(store),
        ResolverConfig::default(),
    );
    (organization, resolver)
}

#[tokio::test]
async fn test_fixture_member_with_teams() {
    let (organization, resolver) = load();

    let permissions = resolver.resolve("dana", &organization).await.unwrap();
    permissions.assert_complete();

    // Collaborator is unrestricted, so the engineer team's restriction is dropped.
    assert_eq!(
        permissions.global.permissions,
        role_permissions("collaborator").union(&role_permissions("engineer"))
    );
    assert!(!permissions.global.limit_access_by_environment);

    // Both project roles are environment limitable: environments are combined.
    let mobile = permissions.project("mobile").unwrap();
    assert_eq!(mobile.permissions, role_permissions("experimenter"));
    assert!(mobile.limit_access_by_environment);
    assert_eq!(mobile.environments, vec!["staging", "production"]);
}

#[tokio::test]
async fn test_fixture_member_defaults() {
    let (organization, resolver) = load();

    let permissions = resolver.resolve("eli", &organization).await.unwrap();
    permissions.assert_complete();
    assert!(!permissions.global.permissions.any());
    assert!(permissions.projects.is_empty());
}

#[tokio::test]
async fn test_fixture_output_roundtrips() {
    let (organization, resolver) = load();

    let permissions = resolver.resolve("dana", &organization).await.unwrap();
    let json = serde_json::to_string(&permissions).unwrap();
    let parsed: permission_resolver::UserPermissions = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, permissions);
}
