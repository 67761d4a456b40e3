// Module declarations
mod connection;
mod role_ops;
mod store;
#[cfg(test)]
mod tests;
mod types;
mod user_ops;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
