//! Per-runner score history model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Score of one runner type within one execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreHistory {
    pub execution_id: String,
    /// Category label, e.g. `api` or `security`
    pub runner_type: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub passed: u32,
    pub recorded_at: Option<DateTime<Utc>>,
}
