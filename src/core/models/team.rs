//! Team models

use super::organization::ProjectMemberRole;
use serde::{Deserialize, Serialize};

/// Team
///
/// A team carries the same authority shape as a member: an organization-wide
/// role plus project overrides. Every member of the team receives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team ID
    pub id: String,
    /// Team name
    #[serde(default)]
    pub name: String,
    /// Organization-wide role granted by the team
    pub role: String,
    /// Environments the role is limited to
    #[serde(default)]
    pub environments: Vec<String>,
    /// Whether the role is limited to `environments`
    #[serde(default)]
    pub limit_access_by_environment: bool,
    /// Per-project role overrides
    #[serde(default)]
    pub project_roles: Vec<ProjectMemberRole>,
}

impl Team {
    /// Create a team granting a role
    pub fn new<I: Into<String>, R: Into<String>>(id: I, role: R) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            role: role.into(),
            environments: Vec::new(),
            limit_access_by_environment: false,
            project_roles: Vec::new(),
        }
    }

    /// Limit the team role to the given environments
    pub fn limited_to<I, S>(mut self, environments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.environments = environments.into_iter().map(Into::into).collect();
        self.limit_access_by_environment = true;
        self
    }

    /// Add a project role override
    pub fn with_project_role(mut self, project_role: ProjectMemberRole) -> Self {
        self.project_roles.push(project_role);
        self
    }
}
