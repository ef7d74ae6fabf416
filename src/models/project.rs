//! Project model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A software project under compliance testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: String,
    /// Display name
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    /// Technology stack label (e.g. `node-express`)
    #[serde(default)]
    pub stack: String,
    /// Score of the most recent execution; `None` only when the project has none
    pub last_score: Option<f64>,
    pub last_execution_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}
