//! Core traits module
//!
//! Contains the abstract interfaces the rest of the crate is written against

pub mod store;

pub use store::AuthStore;
