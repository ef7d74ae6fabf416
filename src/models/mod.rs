//! Domain models for the compliance dashboard.
//!
//! Wire names follow the compliance backend contract; Rust field names are
//! mapped with serde renames where the two differ.

pub mod execution;
pub mod health;
pub mod project;
pub mod run;
pub mod score_history;
pub mod test_result;

// Re-export commonly used types
pub use execution::Execution;
pub use health::HealthStatus;
pub use project::Project;
pub use run::{RunRequest, RunResponse};
pub use score_history::ScoreHistory;
pub use test_result::{TestCategory, TestResult, TestStatus};

/// Default number of executions returned by listings.
pub const DEFAULT_EXECUTION_LIMIT: u32 = 20;

/// Default number of score history records returned for a project.
pub const DEFAULT_HISTORY_LIMIT: u32 = 30;
