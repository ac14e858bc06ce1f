//! Storage seams
//!
//! Persistence of organizations and teams lives outside this crate; the
//! resolver only needs to look teams up.

pub mod teams;

pub use teams::{InMemoryTeamStore, TeamStore};
