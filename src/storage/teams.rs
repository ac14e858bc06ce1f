//! Team lookup

use crate::core::models::Team;
use crate::utils::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Source of team records
///
/// `Ok(None)` means the team does not exist. Both that and `Err` are
/// recovered by the resolver, which skips the team.
#[async_trait]
pub trait TeamStore: Send + Sync {
    /// Find a team by ID within an organization
    async fn find_team(&self, team_id: &str, organization_id: &str) -> Result<Option<Team>>;
}

#[async_trait]
impl<T: TeamStore + ?Sized> TeamStore for Arc<T> {
    async fn find_team(&self, team_id: &str, organization_id: &str) -> Result<Option<Team>> {
        (**self).find_team(team_id, organization_id).await
    }
}

/// Team store backed by a concurrent map, keyed by organization and team ID
#[derive(Debug, Default)]
pub struct InMemoryTeamStore {
    teams: DashMap<(String, String), Team>,
}

impl InMemoryTeamStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a team
    pub fn insert<S: Into<String>>(&self, organization_id: S, team: Team) {
        let organization_id = organization_id.into();
        debug!("Storing team {} for organization {}", team.id, organization_id);
        self.teams.insert((organization_id, team.id.clone()), team);
    }

    /// Remove a team, returning it if present
    pub fn remove(&self, organization_id: &str, team_id: &str) -> Option<Team> {
        self.teams
            .remove(&(organization_id.to_string(), team_id.to_string()))
            .map(|(_, team)| team)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[async_trait]
impl TeamStore for InMemoryTeamStore {
    async fn find_team(&self, team_id: &str, organization_id: &str) -> Result<Option<Team>> {
        Ok(self
            .teams
            .get(&(organization_id.to_string(), team_id.to_string()))
            .map(|entry| entry.value().clone()))
    }
}
