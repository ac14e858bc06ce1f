//! Team authority aggregation

use crate::auth::rbac::RoleRegistry;
use crate::core::models::{Organization, Team};
use crate::storage::TeamStore;
use futures::stream::{self, StreamExt};
use std::collections::BTreeMap;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::scope::{ScopeAuthority, merge_scopes};

/// Folds team grants into a member's scopes
pub(super) struct TeamAuthorityAggregator<'a> {
    registry: &'a RoleRegistry,
    organization: &'a Organization,
    team_store: &'a dyn TeamStore,
    max_concurrency: usize,
}

impl<'a> TeamAuthorityAggregator<'a> {
    pub(super) fn new(
        registry: &'a RoleRegistry,
        organization: &'a Organization,
        team_store: &'a dyn TeamStore,
        max_concurrency: usize,
    ) -> Self {
        Self {
            registry,
            organization,
            team_store,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Look up every distinct team concurrently
    ///
    /// Teams that are missing, fail to load or miss the deadline are left out.
    /// The result is ordered by team ID.
    pub(super) async fn fetch_teams(
        &self,
        team_ids: &[String],
        deadline: Option<Instant>,
    ) -> Vec<Team> {
        let mut distinct: Vec<&str> = team_ids.iter().map(String::as_str).collect();
        distinct.sort_unstable();
        distinct.dedup();

        let mut teams: Vec<Team> = stream::iter(distinct)
            .map(move |team_id| self.fetch_team(team_id, deadline))
            .buffer_unordered(self.max_concurrency)
            .filter_map(|team| async move { team })
            .collect()
            .await;

        teams.sort_by(|a, b| a.id.cmp(&b.id));
        teams
    }

    async fn fetch_team(&self, team_id: &str, deadline: Option<Instant>) -> Option<Team> {
        let lookup = self.team_store.find_team(team_id, &self.organization.id);
        let result = match deadline {
            Some(deadline) => match tokio::time::timeout_at(deadline, lookup).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(
                        organization_id = %self.organization.id,
                        "Team lookup for {} timed out, skipping", team_id
                    );
                    return None;
                }
            },
            None => lookup.await,
        };

        match result {
            Ok(Some(team)) => Some(team),
            Ok(None) => {
                warn!(
                    organization_id = %self.organization.id,
                    "Team {} not found, skipping", team_id
                );
                None
            }
            Err(e) => {
                warn!(
                    organization_id = %self.organization.id,
                    "Team lookup for {} failed, skipping: {}", team_id, e
                );
                None
            }
        }
    }

    /// Merge one team's global and project grants into the member's scopes
    pub(super) fn apply_team(
        &self,
        team: &Team,
        global: &mut ScopeAuthority,
        projects: &mut BTreeMap<String, ScopeAuthority>,
    ) {
        debug!("Applying team {} with role {}", team.id, team.role);

        let incoming = ScopeAuthority::for_role(
            self.registry,
            self.organization,
            &team.role,
            &team.environments,
            team.limit_access_by_environment,
        );
        *global = merge_scopes(self.registry, global, &incoming);

        for project_role in &team.project_roles {
            let incoming =
                ScopeAuthority::for_project_role(self.registry, self.organization, project_role);
            let existing = projects
                .entry(project_role.project.clone())
                .or_insert_with(ScopeAuthority::empty);
            *existing = merge_scopes(self.registry, existing, &incoming);
        }
    }
}
