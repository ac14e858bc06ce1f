//! Error types for permission resolution

use thiserror::Error;

/// Result type alias for the resolver
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Main error type for the resolver
///
/// Only [`ResolverError::NotAMember`] ever escapes a resolution. Team lookup
/// failures are produced by [`TeamStore`](crate::storage::TeamStore)
/// implementations and recovered by the resolver.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// The user has no member record in the organization
    #[error("User {user_id} is not a member of organization {organization_id}")]
    NotAMember {
        user_id: String,
        organization_id: String,
    },

    /// Team store errors
    #[error("Team lookup error: {0}")]
    TeamLookup(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
