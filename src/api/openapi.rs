//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models, services};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coder Compliance Dashboard",
        version = "0.1.0",
        description = "Compliance-test results per project, live or from the demo dataset"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::health,
        api::projects::list_projects,
        api::projects::get_project,
        api::executions::get_execution,
        api::runs::submit_run,
    ),
    components(
        schemas(
            error::ErrorResponse,
            api::health::HealthResponse,
            models::Project,
            models::Execution,
            models::TestResult,
            models::TestStatus,
            models::ScoreHistory,
            models::RunRequest,
            models::RunResponse,
            models::HealthStatus,
            services::score::ColorBand,
            services::score::ScoreClassification,
            services::dashboard::ProjectCard,
            services::dashboard::ProjectsOverview,
            services::dashboard::ExecutionRow,
            services::dashboard::RunnerScore,
            services::dashboard::TrendPoint,
            services::dashboard::ProjectDetail,
            services::dashboard::ExecutionDetail,
        )
    ),
    tags(
        (name = "Health", description = "Service and backend health"),
        (name = "Projects", description = "Project overview and detail pages"),
        (name = "Executions", description = "Execution drill-down"),
        (name = "Runs", description = "Trigger suite runs on the backend"),
    )
)]
pub struct ApiDoc;
