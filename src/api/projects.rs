//! Project page handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::ComplianceClient;
use crate::services::dashboard::{self, ProjectDetail, ProjectsOverview};

/// List every project with its score classification.
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "Projects",
    responses(
        (status = 200, description = "Projects overview", body = ProjectsOverview),
    )
)]
pub async fn list_projects(client: web::Data<ComplianceClient>) -> AppResult<HttpResponse> {
    let overview = dashboard::load_projects_overview(&client).await?;
    Ok(HttpResponse::Ok().json(overview))
}

/// Project detail: score breakdown per runner, trend and recent executions.
#[utoipa::path(
    get,
    path = "/api/v1/projects/{project_id}",
    tag = "Projects",
    params(
        ("project_id" = Uuid, Path, description = "Project UUID")
    ),
    responses(
        (status = 200, description = "Project detail", body = ProjectDetail),
        (status = 400, description = "Malformed project id", body = crate::error::ErrorResponse),
        (status = 404, description = "Project not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_project(
    client: web::Data<ComplianceClient>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let project_id = Uuid::parse_str(&path.into_inner())?;
    let detail = dashboard::load_project_detail(&client, &project_id.to_string()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Configure project routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/projects").route(web::get().to(list_projects)))
        .service(web::resource("/projects/{project_id}").route(web::get().to(get_project)));
}
