//! Resolver configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Permission resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Deadline in milliseconds for the batch of team lookups of one resolution (0 disables it)
    #[serde(default = "default_team_lookup_timeout_ms")]
    pub team_lookup_timeout_ms: u64,
    /// Maximum number of team lookups in flight for one resolution
    #[serde(default = "default_max_concurrent_team_lookups")]
    pub max_concurrent_team_lookups: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            team_lookup_timeout_ms: default_team_lookup_timeout_ms(),
            max_concurrent_team_lookups: default_max_concurrent_team_lookups(),
        }
    }
}

impl ResolverConfig {
    /// Team lookup deadline, `None` when disabled
    pub fn team_lookup_timeout(&self) -> Option<Duration> {
        (self.team_lookup_timeout_ms > 0).then(|| Duration::from_millis(self.team_lookup_timeout_ms))
    }

    /// Merge resolver configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.team_lookup_timeout_ms != default_team_lookup_timeout_ms() {
            self.team_lookup_timeout_ms = other.team_lookup_timeout_ms;
        }
        if other.max_concurrent_team_lookups != default_max_concurrent_team_lookups() {
            self.max_concurrent_team_lookups = other.max_concurrent_team_lookups;
        }
        self
    }
}

/// Default team lookup deadline
pub fn default_team_lookup_timeout_ms() -> u64 {
    5000
}

/// Default team lookup fan-out
pub fn default_max_concurrent_team_lookups() -> usize {
    16
}
