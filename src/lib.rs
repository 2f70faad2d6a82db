//! Nereo ML - liveness and readiness service
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod routes;
