//! Built-in role catalog

use super::types::{Permission, Role};

use Permission::*;

const COLLABORATOR: &[Permission] = &[AddComments, CreateIdeas, CreatePresentations];

const ANALYST: &[Permission] = &[
    CreateAnalyses,
    CreateDimensions,
    CreateMetrics,
    CreateSegments,
    RunQueries,
    EditDatasourceSettings,
    ManageFactTables,
];

const ENGINEER: &[Permission] = &[
    CreateAnalyses,
    CreateDimensions,
    CreateFeatureDrafts,
    ManageFeatures,
    ManageTargetingAttributes,
    ManageEnvironments,
    ManageNamespaces,
    ManageSavedGroups,
    PublishFeatures,
    ManageVisualChanges,
];

/// Concatenate permission lists, keeping the first occurrence of each permission
fn combine(lists: &[&[Permission]]) -> Vec<Permission> {
    let mut permissions: Vec<Permission> = Vec::new();
    for permission in lists.iter().flat_map(|list| list.iter()) {
        if !permissions.contains(permission) {
            permissions.push(*permission);
        }
    }
    permissions
}

fn system_role(
    id: &str,
    description: &str,
    permissions: Vec<Permission>,
    access_level: u8,
    environment_limitable: bool,
) -> Role {
    Role {
        id: id.to_string(),
        description: description.to_string(),
        permissions,
        access_level,
        environment_limitable,
        is_system: true,
    }
}

/// The built-in roles, ordered by access level
pub(super) fn builtin_roles() -> Vec<Role> {
    vec![
        system_role("readonly", "View all features and experiment results", vec![], 0, false),
        system_role(
            "collaborator",
            "Add comments and contribute ideas",
            combine(&[COLLABORATOR]),
            1,
            false,
        ),
        system_role(
            "analyst",
            "Analyze experiments",
            combine(&[COLLABORATOR, ANALYST]),
            2,
            false,
        ),
        system_role(
            "engineer",
            "Manage features",
            combine(&[COLLABORATOR, ENGINEER]),
            3,
            true,
        ),
        system_role(
            "experimenter",
            "Manage features AND analyze experiments",
            combine(&[COLLABORATOR, ENGINEER, ANALYST, &[RunExperiments]]),
            4,
            true,
        ),
        system_role(
            "admin",
            "Organization admin with full access",
            Permission::ALL.to_vec(),
            5,
            false,
        ),
    ]
}
