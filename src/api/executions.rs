//! Execution page handler.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::ComplianceClient;
use crate::services::dashboard::{self, ExecutionDetail};

/// Execution detail with its failures and every test result.
#[utoipa::path(
    get,
    path = "/api/v1/executions/{execution_id}",
    tag = "Executions",
    params(
        ("execution_id" = Uuid, Path, description = "Execution UUID")
    ),
    responses(
        (status = 200, description = "Execution detail", body = ExecutionDetail),
        (status = 400, description = "Malformed execution id", body = crate::error::ErrorResponse),
        (status = 404, description = "Execution not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_execution(
    client: web::Data<ComplianceClient>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let execution_id = Uuid::parse_str(&path.into_inner())?;
    let detail = dashboard::load_execution_detail(&client, &execution_id.to_string()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Configure execution routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/executions/{execution_id}").route(web::get().to(get_execution)));
}
