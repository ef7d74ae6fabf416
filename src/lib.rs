//! Compliance dashboard library.
//!
//! Serves compliance-test results (API and security checks) per project.
//! Queries go to the live compliance backend through a resilient client that
//! falls back to a deterministic demo dataset when the backend is unreachable.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
