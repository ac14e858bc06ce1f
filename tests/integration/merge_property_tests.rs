//! Property-based tests for the scope merger and team aggregation
//!
//! - Monotonicity: nothing granted by either side is lost in a merge
//! - Unrestricted access beats restricted access
//! - Every merged or resolved permission set covers the whole taxonomy
//! - Resolution does not depend on the order of a member's teams

use crate::common::PermissionAssertions;
use crate::common::fixtures::{OrganizationFactory, ResolverFactory};
use permission_resolver::{
    Member, Permission, PermissionSet, ProjectMemberRole, RoleRegistry, ScopeAuthority, Team,
    merge_scopes,
};
use proptest::prelude::*;

const ROLES: &[&str] = &[
    "readonly",
    "collaborator",
    "analyst",
    "engineer",
    "experimenter",
    "admin",
    "ghost",
];
const ENVIRONMENTS: &[&str] = &["development", "staging", "production", "qa"];
const PROJECTS: &[&str] = &["checkout", "mobile", "search"];

// ============================================================================
// Arbitrary Generators
// ============================================================================

/// Built-in role id, or an id no registry knows
fn arb_role() -> impl Strategy<Value = String> {
    prop::sample::select(ROLES).prop_map(str::to_string)
}

fn arb_environments() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(ENVIRONMENTS, 0..=ENVIRONMENTS.len())
        .prop_map(|envs| envs.into_iter().map(str::to_string).collect())
}

fn arb_permission_set() -> impl Strategy<Value = PermissionSet> {
    prop::collection::vec(any::<bool>(), Permission::ALL.len()).prop_map(|flags| {
        PermissionSet::from_granted(
            Permission::ALL
                .iter()
                .zip(flags)
                .filter_map(|(permission, granted)| granted.then_some(*permission)),
        )
    })
}

fn arb_scope<R>(role: R) -> impl Strategy<Value = ScopeAuthority>
where
    R: Strategy<Value = Option<String>>,
{
    (role, arb_permission_set(), arb_environments(), any::<bool>()).prop_map(
        |(role, permissions, environments, limit_access_by_environment)| ScopeAuthority {
            role,
            permissions,
            environments,
            limit_access_by_environment,
        },
    )
}

fn arb_project_role() -> impl Strategy<Value = ProjectMemberRole> {
    (
        prop::sample::select(PROJECTS),
        arb_role(),
        arb_environments(),
        any::<bool>(),
    )
        .prop_map(
            |(project, role, environments, limit_access_by_environment)| ProjectMemberRole {
                project: project.to_string(),
                role,
                environments,
                limit_access_by_environment,
            },
        )
}

/// Teams with distinct ids, in generation order and shuffled
fn arb_team_orders() -> impl Strategy<Value = (Vec<Team>, Vec<Team>)> {
    prop::collection::vec(
        (
            arb_role(),
            arb_environments(),
            any::<bool>(),
            prop::collection::vec(arb_project_role(), 0..3),
        ),
        1..5,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(index, (role, environments, limited, project_roles))| Team {
                id: format!("team_{}", index),
                name: format!("Team {}", index),
                role,
                environments,
                limit_access_by_environment: limited,
                project_roles,
            })
            .collect::<Vec<_>>()
    })
    .prop_flat_map(|teams| (Just(teams.clone()), Just(teams).prop_shuffle()))
}

fn arb_member() -> impl Strategy<Value = Member> {
    (
        arb_role(),
        arb_environments(),
        any::<bool>(),
        prop::option::of(arb_project_role()),
    )
        .prop_map(|(role, environments, limited, project_role)| Member {
            id: "member".to_string(),
            role,
            environments,
            limit_access_by_environment: limited,
            project_roles: project_role.into_iter().collect(),
            teams: Vec::new(),
        })
}

fn resolve(member: &Member, teams: &[Team]) -> permission_resolver::UserPermissions {
    let mut member = member.clone();
    member.teams = teams.iter().map(|team| team.id.clone()).collect();
    let organization = OrganizationFactory::with_member(member);
    let resolver = ResolverFactory::with_teams(teams.to_vec());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime
        .block_on(resolver.resolve("member", &organization))
        .unwrap()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn merge_is_monotone(
        existing in arb_scope(prop::option::of(arb_role())),
        incoming in arb_scope(arb_role().prop_map(Some)),
    ) {
        let merged = merge_scopes(&RoleRegistry::builtin(), &existing, &incoming);

        for permission in Permission::ALL {
            let either = existing.permissions.get(*permission) || incoming.permissions.get(*permission);
            prop_assert_eq!(merged.permissions.get(*permission), either);
        }
    }

    #[test]
    fn merge_keeps_existing_role(
        existing in arb_scope(prop::option::of(arb_role())),
        incoming in arb_scope(arb_role().prop_map(Some)),
    ) {
        let merged = merge_scopes(&RoleRegistry::builtin(), &existing, &incoming);
        prop_assert_eq!(merged.role, existing.role);
    }

    #[test]
    fn unrestricted_access_beats_restricted(
        existing in arb_scope(arb_role().prop_map(Some)),
        incoming in arb_scope(arb_role().prop_map(Some)),
    ) {
        prop_assume!(!existing.limit_access_by_environment || !incoming.limit_access_by_environment);

        let merged = merge_scopes(&RoleRegistry::builtin(), &existing, &incoming);
        prop_assert!(!merged.limit_access_by_environment);
        prop_assert!(merged.environments.is_empty());
    }

    #[test]
    fn merged_environments_come_from_inputs(
        existing in arb_scope(arb_role().prop_map(Some)),
        incoming in arb_scope(arb_role().prop_map(Some)),
    ) {
        let merged = merge_scopes(&RoleRegistry::builtin(), &existing, &incoming);

        for environment in &merged.environments {
            prop_assert!(
                existing.environments.contains(environment)
                    || incoming.environments.contains(environment)
            );
        }
        let mut deduped = merged.environments.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), merged.environments.len());
    }

    #[test]
    fn merged_sets_are_complete(
        existing in arb_scope(prop::option::of(arb_role())),
        incoming in arb_scope(prop::option::of(arb_role())),
    ) {
        let merged = merge_scopes(&RoleRegistry::builtin(), &existing, &incoming);
        prop_assert_eq!(merged.permissions.len(), Permission::ALL.len());
    }

    #[test]
    fn team_order_does_not_change_result(
        member in arb_member(),
        (teams, shuffled) in arb_team_orders(),
    ) {
        let forward = resolve(&member, &teams);
        let reordered = resolve(&member, &shuffled);

        forward.assert_complete();
        prop_assert_eq!(forward, reordered);
    }

    #[test]
    fn teams_never_remove_member_permissions(
        member in arb_member(),
        (teams, _) in arb_team_orders(),
    ) {
        let alone = resolve(&member, &[]);
        let with_teams = resolve(&member, &teams);

        for permission in Permission::ALL {
            if alone.global.permissions.get(*permission) {
                prop_assert!(with_teams.global.permissions.get(*permission));
            }
        }
        for (project, scope) in &alone.projects {
            let merged = with_teams.projects.get(project);
            prop_assert!(merged.is_some());
            for (permission, granted) in scope.permissions.iter() {
                if granted {
                    prop_assert!(merged.unwrap().permissions.get(permission));
                }
            }
        }
    }
}
