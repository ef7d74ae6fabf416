//! Backend health model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status reported when the live backend is unreachable.
pub const DEMO_STATUS: &str = "demo";

/// Service name reported alongside [`DEMO_STATUS`].
pub const DEMO_SERVICE: &str = "coder-compliance-demo";

/// Status reported when the backend answered but its health could not be read.
pub const UNAVAILABLE_STATUS: &str = "unavailable";

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
}

impl HealthStatus {
    /// Stand-in health for an unreachable backend.
    pub fn demo() -> Self {
        HealthStatus {
            status: DEMO_STATUS.to_string(),
            service: DEMO_SERVICE.to_string(),
        }
    }

    /// Degraded health for a backend whose health answer was unusable;
    /// `reason` is carried in `service`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        HealthStatus {
            status: UNAVAILABLE_STATUS.to_string(),
            service: reason.into(),
        }
    }

    /// True when this status came from the demo stand-in rather than the backend.
    pub fn is_demo(&self) -> bool {
        self.status == DEMO_STATUS
    }
}
