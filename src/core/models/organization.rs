//! Organization and member models

use serde::{Deserialize, Serialize};

/// Organization record as seen by the resolver
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization ID
    pub id: String,
    /// Organization members
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Organization {
    /// Create an organization without members
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            members: Vec::new(),
        }
    }

    /// Add a member
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Find a member by user ID
    pub fn member(&self, user_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == user_id)
    }
}

/// A user's row inside an organization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// User ID
    pub id: String,
    /// Organization-wide role
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
    /// Team IDs
    #[serde(default)]
    pub teams: Vec<String>,
}

impl Member {
    /// Create a member with an organization role and nothing else
    pub fn new<U: Into<String>, R: Into<String>>(user_id: U, role: R) -> Self {
        Self {
            id: user_id.into(),
            role: role.into(),
            environments: Vec::new(),
            limit_access_by_environment: false,
            project_roles: Vec::new(),
            teams: Vec::new(),
        }
    }

    /// Limit the organization role to the given environments
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

    /// Add a team membership
    pub fn with_team<S: Into<String>>(mut self, team_id: S) -> Self {
        self.teams.push(team_id.into());
        self
    }

    /// Role override for a project
    pub fn project_role(&self, project_id: &str) -> Option<&ProjectMemberRole> {
        self.project_roles.iter().find(|p| p.project == project_id)
    }
}

/// Role held in a single project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberRole {
    /// Project ID
    pub project: String,
    /// Role in the project
    pub role: String,
    /// Environments the role is limited to
    #[serde(default)]
    pub environments: Vec<String>,
    /// Whether the role is limited to `environments`
    #[serde(default)]
    pub limit_access_by_environment: bool,
}

impl ProjectMemberRole {
    /// Create an unrestricted project role
    pub fn new<P: Into<String>, R: Into<String>>(project: P, role: R) -> Self {
        Self {
            project: project.into(),
            role: role.into(),
            environments: Vec::new(),
            limit_access_by_environment: false,
        }
    }

    /// Limit the project role to the given environments
    pub fn limited_to<I, S>(mut self, environments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.environments = environments.into_iter().map(Into::into).collect();
        self.limit_access_by_environment = true;
        self
    }
}
