//! Dashboard E2E test suite.
//!
//! Drives the compliance client and the HTTP routes against an in-process
//! mock backend, and against a closed port for the offline paths.
//!
//! Run with: cargo test --test dashboard_e2e

mod mock_backend;
mod test_helpers;

mod test_live;
mod test_routes;
