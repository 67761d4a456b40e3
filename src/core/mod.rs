//! Core data structures and interfaces

pub mod models;
pub mod traits;
