//! Helper functions for creating specific error types

use super::types::ResolverError;

impl ResolverError {
    pub fn not_a_member<U: Into<String>, O: Into<String>>(user_id: U, organization_id: O) -> Self {
        Self::NotAMember {
            user_id: user_id.into(),
            organization_id: organization_id.into(),
        }
    }

    pub fn team_lookup<S: Into<String>>(message: S) -> Self {
        Self::TeamLookup(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error means the user does not belong to the organization
    pub fn is_not_a_member(&self) -> bool {
        matches!(self, Self::NotAMember { .. })
    }
}
