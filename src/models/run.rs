//! Run submission request and response.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Maximum accepted project name length.
pub const MAX_PROJECT_NAME_LEN: usize = 100;

fn default_types() -> Vec<String> {
    vec!["all".to_string()]
}

fn default_environment() -> String {
    "local".to_string()
}

/// Body of `POST /api/runs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RunRequest {
    pub project_name: String,
    /// Runner types to execute; `all` runs every runner
    #[serde(default = "default_types")]
    pub types: Vec<String>,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub confirm: bool,
}

impl RunRequest {
    /// Request for every runner against the local environment, unconfirmed.
    pub fn new(project_name: impl Into<String>) -> Self {
        RunRequest {
            project_name: project_name.into(),
            types: default_types(),
            environment: default_environment(),
            confirm: false,
        }
    }

    /// Reject requests the backend would refuse before spending a round trip.
    pub fn validate(&self) -> AppResult<()> {
        let len = self.project_name.chars().count();
        if len == 0 || len > MAX_PROJECT_NAME_LEN {
            return Err(AppError::InvalidInput(format!(
                "project_name must be 1-{} characters, got {}",
                MAX_PROJECT_NAME_LEN, len
            )));
        }
        Ok(())
    }
}

/// Response of `POST /api/runs`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct RunResponse {
    pub execution_id: Option<String>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub passed: u32,
    #[serde(default)]
    pub failed: u32,
    #[serde(default)]
    pub message: String,
}
