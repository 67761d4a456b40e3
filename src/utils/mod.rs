//! Utility modules
//!
//! - **error**: crate error type and its HTTP rendering
//! - **logging**: subscriber setup

pub mod error;
pub mod logging;

pub use error::{HealthOpsError, Result};
pub use logging::init_logging;
