//! Run submission handler.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::error::AppResult;
use crate::models::{RunRequest, RunResponse};
use crate::services::ComplianceClient;

/// Forward a run request to the compliance backend.
///
/// There is no demo fallback: backend errors are passed through.
#[utoipa::path(
    post,
    path = "/api/v1/runs",
    tag = "Runs",
    request_body = RunRequest,
    responses(
        (status = 200, description = "Run accepted by the backend", body = RunResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 502, description = "Backend unreachable", body = crate::error::ErrorResponse),
    )
)]
pub async fn submit_run(
    client: web::Data<ComplianceClient>,
    body: web::Json<RunRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    let response = client.submit_run(&request).await?;
    info!(
        "Run submitted for '{}' (execution_id={:?})",
        request.project_name, response.execution_id
    );
    Ok(HttpResponse::Ok().json(response))
}

/// Configure run routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/runs").route(web::post().to(submit_run)));
}
