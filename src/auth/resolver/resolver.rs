//! Permission resolver entry point

use crate::auth::rbac::{PermissionSet, RoleRegistry};
use crate::config::ResolverConfig;
use crate::core::models::{Organization, UserPermissions};
use crate::storage::TeamStore;
use crate::utils::error::{ResolverError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info};

use super::scope::ScopeAuthority;
use super::teams::TeamAuthorityAggregator;

/// Computes the effective permissions of organization members
///
/// Holds no per-user state; every call to [`resolve`](Self::resolve) is
/// computed fresh from the organization and the team store.
#[derive(Clone)]
pub struct PermissionResolver {
    registry: Arc<RoleRegistry>,
    team_store: Arc<dyn TeamStore>,
    config: ResolverConfig,
}

impl std::fmt::Debug for PermissionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionResolver")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PermissionResolver {
    /// Create a new resolver
    pub fn new(
        registry: Arc<RoleRegistry>,
        team_store: Arc<dyn TeamStore>,
        config: ResolverConfig,
    ) -> Self {
        info!(
            "Creating permission resolver (team lookup timeout: {}ms, max concurrent lookups: {})",
            config.team_lookup_timeout_ms, config.max_concurrent_team_lookups
        );
        Self {
            registry,
            team_store,
            config,
        }
    }

    /// Get the role registry
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Get the resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Expand a role of the organization into a full permission set
    pub fn role_to_permissions(
        &self,
        role_id: Option<&str>,
        organization: &Organization,
    ) -> PermissionSet {
        self.registry
            .for_organization(organization)
            .role_to_permissions(role_id, organization)
    }

    /// Resolve a user's permissions, bounding team lookups by the configured timeout
    pub async fn resolve(
        &self,
        user_id: &str,
        organization: &Organization,
    ) -> Result<UserPermissions> {
        let deadline = self
            .config
            .team_lookup_timeout()
            .map(|timeout| Instant::now() + timeout);
        self.resolve_with_deadline(user_id, organization, deadline)
            .await
    }

    /// Resolve a user's permissions, abandoning team lookups still pending at `deadline`
    ///
    /// Fails only when the user is not a member of the organization.
    pub async fn resolve_with_deadline(
        &self,
        user_id: &str,
        organization: &Organization,
        deadline: Option<Instant>,
    ) -> Result<UserPermissions> {
        let member = organization
            .member(user_id)
            .ok_or_else(|| ResolverError::not_a_member(user_id, &organization.id))?;
        let registry = self.registry.for_organization(organization);

        debug!(
            organization_id = %organization.id,
            "Resolving permissions for {} (role: {}, projects: {}, teams: {})",
            user_id,
            member.role,
            member.project_roles.len(),
            member.teams.len()
        );

        let mut global = ScopeAuthority::for_role(
            registry,
            organization,
            &member.role,
            &member.environments,
            member.limit_access_by_environment,
        );
        let mut projects: BTreeMap<String, ScopeAuthority> = member
            .project_roles
            .iter()
            .map(|project_role| {
                (
                    project_role.project.clone(),
                    ScopeAuthority::for_project_role(registry, organization, project_role),
                )
            })
            .collect();

        if !member.teams.is_empty() {
            let aggregator = TeamAuthorityAggregator::new(
                registry,
                organization,
                self.team_store.as_ref(),
                self.config.max_concurrent_team_lookups,
            );
            let teams = aggregator.fetch_teams(&member.teams, deadline).await;
            debug!(
                "Resolved {} of {} team references for {}",
                teams.len(),
                member.teams.len(),
                user_id
            );

            for team in &teams {
                aggregator.apply_team(team, &mut global, &mut projects);
            }
        }

        Ok(UserPermissions {
            global: global.into_permissions(),
            projects: projects
                .into_iter()
                .map(|(project, scope)| (project, scope.into_permissions()))
                .collect(),
        })
    }
}
