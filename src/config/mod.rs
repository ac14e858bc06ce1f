//! Configuration management
//!
//! This module handles loading, validation, and merging of the resolver configuration.

pub mod models;
pub mod validation;


pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ResolverError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable overriding `resolver.team_lookup_timeout_ms`
pub const ENV_TEAM_LOOKUP_TIMEOUT_MS: &str = "PERMISSION_RESOLVER_TEAM_LOOKUP_TIMEOUT_MS";
/// Environment variable overriding `resolver.max_concurrent_team_lookups`
pub const ENV_MAX_CONCURRENT_TEAM_LOOKUPS: &str = "PERMISSION_RESOLVER_MAX_CONCURRENT_TEAM_LOOKUPS";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Resolver configuration
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ResolverError::config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables, defaulting unset values
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut resolver = ResolverConfig::default();
        if let Some(value) = read_env(ENV_TEAM_LOOKUP_TIMEOUT_MS)? {
            resolver.team_lookup_timeout_ms = value;
        }
        if let Some(value) = read_env(ENV_MAX_CONCURRENT_TEAM_LOOKUPS)? {
            resolver.max_concurrent_team_lookups = value;
        }

        let config = Self { resolver };
        config.validate()?;
        Ok(config)
    }

    /// Get resolver configuration
    pub fn resolver(&self) -> &ResolverConfig {
        &self.resolver
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.resolver
            .validate()
            .map_err(|e| ResolverError::config(format!("Resolver config error: {}", e)))
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.resolver = self.resolver.merge(other.resolver);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

fn read_env<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ResolverError::config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}
