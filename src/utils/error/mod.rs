//! Error handling
//!
//! A single error enum covers the crate. Resolution itself only fails with
//! [`ResolverError::NotAMember`]; every other anomaly degrades to "no additional access".

mod helpers;
mod types;

pub use types::{ResolverError, Result};
