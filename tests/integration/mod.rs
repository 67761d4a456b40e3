//! Integration tests for healthops
//!
//! Exercise the auth system, the relational store and the HTTP surface
//! together, without mocking.

pub mod auth_flow_tests;
pub mod database_tests;
pub mod http_tests;
