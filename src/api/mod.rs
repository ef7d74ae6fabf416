//! API endpoint modules.

pub mod executions;
pub mod health;
pub mod openapi;
pub mod projects;
pub mod runs;

pub use executions::configure_routes as configure_execution_routes;
pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use projects::configure_routes as configure_project_routes;
pub use runs::configure_routes as configure_run_routes;

use actix_web::web;

/// Mount every dashboard route; callers scope it under `/api/v1`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes)
        .configure(configure_project_routes)
        .configure(configure_execution_routes)
        .configure(configure_run_routes);
}
