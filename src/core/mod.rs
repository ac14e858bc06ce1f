//! Core data structures

pub mod models;
