//! Test result model representing individual test outcomes within an execution.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Test outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Pass,
    Fail,
    Skip,
    Error,
}

impl TestStatus {
    /// Wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Skip => "skip",
            Self::Error => "error",
        }
    }

    /// Failing outcomes carry a detail message.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail | Self::Error)
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Functional grouping of a test (the "runner type" in score history).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestCategory {
    Api,
    Security,
}

impl TestCategory {
    /// Categories in the order they are reported.
    pub const ALL: [TestCategory; 2] = [TestCategory::Api, TestCategory::Security];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Security => "security",
        }
    }
}

impl std::fmt::Display for TestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn default_severity() -> String {
    "info".to_string()
}

/// Outcome of one test within an execution.
///
/// `category` stays a plain string on the wire: the live backend also
/// reports runner types beyond [`TestCategory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TestResult {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub category: String,
    pub status: TestStatus,
    #[serde(rename = "duracao_ms", default)]
    pub duration_ms: f64,
    /// Failure detail; empty unless the status is a failure
    #[serde(rename = "detalhes", default)]
    pub detail: String,
    #[serde(rename = "severidade", default = "default_severity")]
    pub severity: String,
    #[serde(rename = "grupo", default)]
    pub group: String,
}
