//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declares the permission taxonomy: the enum, its wire keys and its scope classes.
macro_rules! permission_taxonomy {
    ($($scope:ident => [$($variant:ident = $key:literal),+ $(,)?]),+ $(,)?) => {
        /// A permission key from the closed taxonomy
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum Permission {
            $($(
                #[serde(rename = $key)]
                $variant,
            )+)+
        }

        impl Permission {
            /// Every permission in the taxonomy, in declaration order
            pub const ALL: &'static [Permission] = &[$($(Permission::$variant,)+)+];

            /// Wire key of the permission
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($(Permission::$variant => $key,)+)+
                }
            }

            /// Scope class the permission belongs to
            pub fn scope(&self) -> PermissionScope {
                match self {
                    $($(Permission::$variant => PermissionScope::$scope,)+)+
                }
            }
        }
    };
}

permission_taxonomy! {
    Global => [
        CreatePresentations = "createPresentations",
        CreateDimensions = "createDimensions",
        CreateSegments = "createSegments",
        OrganizationSettings = "organizationSettings",
        SuperDelete = "superDelete",
        ManageTeam = "manageTeam",
        ManageTags = "manageTags",
        ManageApiKeys = "manageApiKeys",
        ManageIntegrations = "manageIntegrations",
        ManageWebhooks = "manageWebhooks",
        ManageBilling = "manageBilling",
        ManageNorthStarMetric = "manageNorthStarMetric",
        ManageTargetingAttributes = "manageTargetingAttributes",
        ManageNamespaces = "manageNamespaces",
        ManageSavedGroups = "manageSavedGroups",
        ViewEvents = "viewEvents",
    ],
    Project => [
        AddComments = "addComments",
        CreateIdeas = "createIdeas",
        CreateAnalyses = "createAnalyses",
        CreateMetrics = "createMetrics",
        CreateFeatureDrafts = "createFeatureDrafts",
        ManageFeatures = "manageFeatures",
        ManageProjects = "manageProjects",
        ManageVisualChanges = "manageVisualChanges",
        RunQueries = "runQueries",
        CreateDatasources = "createDatasources",
        EditDatasourceSettings = "editDatasourceSettings",
        ManageFactTables = "manageFactTables",
    ],
    Environment => [
        PublishFeatures = "publishFeatures",
        ManageEnvironments = "manageEnvironments",
        RunExperiments = "runExperiments",
    ],
}

/// Scope class of a permission
///
/// The classes are disjoint. Environment-class permissions are also project
/// scoped, see [`Permission::is_project_scoped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionScope {
    /// Only meaningful organization-wide
    Global,
    /// Can be granted per project
    Project,
    /// Can be granted per project and restricted to deployment environments
    Environment,
}

/// Role definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Role id
    pub id: String,
    /// Role description
    pub description: String,
    /// Permissions granted by this role
    pub permissions: Vec<Permission>,
    /// Precedence rank, higher is more privileged
    pub access_level: u8,
    /// Whether grants of this role can be restricted to environments
    #[serde(default)]
    pub environment_limitable: bool,
    /// Whether this is a built-in role
    #[serde(default)]
    pub is_system: bool,
}

/// Grant state of every permission in the taxonomy
///
/// A set always carries every key; deserializing a partial map fills the
/// missing keys with `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Permission, bool>",
    into = "BTreeMap<Permission, bool>"
)]
pub struct PermissionSet(pub(super) BTreeMap<Permission, bool>);
