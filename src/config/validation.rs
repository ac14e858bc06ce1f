//! Configuration validation

use super::models::*;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating resolver configuration");

        if self.max_concurrent_team_lookups == 0 {
            return Err("Max concurrent team lookups must be greater than 0".to_string());
        }

        if self.team_lookup_timeout_ms > 300_000 {
            return Err("Team lookup timeout should not exceed 5 minutes".to_string());
        }

        Ok(())
    }
}
