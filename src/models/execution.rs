//! Execution model: one complete run of the compliance suite against a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::score::percentage;

/// Metadata and counters of a single suite execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Execution {
    pub id: String,
    pub project_id: String,
    /// Denormalized owning project name
    #[serde(rename = "projeto_nome", default)]
    pub project_name: String,
    /// Environment label (e.g. `local`)
    #[serde(rename = "ambiente")]
    pub environment: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Percentage of passed tests, one decimal place
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub passed: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub errors: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(rename = "duracao_ms", default)]
    pub duration_ms: f64,
}

impl Execution {
    /// Whether `total = passed + failed + errors + skipped` holds.
    pub fn counts_consistent(&self) -> bool {
        self.total == self.passed + self.failed + self.errors + self.skipped
    }

    /// Score recomputed from the counters; `None` when nothing ran.
    pub fn computed_score(&self) -> Option<f64> {
        percentage(self.passed, self.total)
    }
}
