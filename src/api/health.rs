//! Health check endpoint.

use actix_web::{HttpResponse, get, web};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use tracing::warn;

use crate::models::HealthStatus;
use crate::services::ComplianceClient;

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
    /// Health reported by the compliance backend, the demo stand-in, or `unavailable`
    backend: HealthStatus,
    /// True when dashboard data is coming from the demo dataset
    demo_mode: bool,
}

/// Health check endpoint.
///
/// Returns 200 while the dashboard is running, whatever state the backend is
/// in. `demo_mode` is set when the backend is unreachable; a backend whose
/// health answer cannot be read reports `unavailable`.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health(client: web::Data<ComplianceClient>) -> HttpResponse {
    let backend = match client.health().await {
        Ok(status) => status,
        Err(e) => {
            warn!("Backend health unreadable: {}", e);
            HealthStatus::unavailable(e.to_string())
        }
    };
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        demo_mode: backend.is_demo(),
        backend,
    })
}

/// Configure health routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
