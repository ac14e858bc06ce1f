//! Configuration data models

pub mod resolver;

pub use resolver::*;
