//! Compliance dashboard server - main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, web};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use compliance_dashboard_lib::api::{self, ApiDoc};
use compliance_dashboard_lib::config::Config;
use compliance_dashboard_lib::middleware::RequestLogger;
use compliance_dashboard_lib::services::ComplianceClient;

/// Perform health check (for Docker healthcheck).
fn health_check() -> bool {
    Config::from_env().is_ok()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Check for --health-check flag (used by Docker HEALTHCHECK)
    if std::env::args().any(|arg| arg == "--health-check") {
        dotenvy::dotenv().ok();
        std::process::exit(if health_check() { 0 } else { 1 });
    }

    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, CC_BACKEND_URL and CC_CORS_ORIGINS must be set");
            error!("  - In production, values must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Compliance Dashboard");
    info!("  Environment: {}", config.environment);
    info!("  Backend: {}", config.backend.base_url);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let client = match ComplianceClient::from_settings(&config.backend) {
        Ok(client) => web::Data::new(client),
        Err(e) => {
            error!("Failed to build backend client: {}", e);
            std::process::exit(1);
        }
    };

    let bind_address = config.bind_address();
    let is_development = config.is_development();
    let cors_origins = config.cors_origins.clone();
    let openapi = ApiDoc::openapi();

    let worker_count = if is_development {
        info!(
            "Starting server at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!("Starting server at http://{} ({} workers)", bind_address, cpus);
        cpus
    };

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);
        for origin in &cors_origins {
            cors = cors.allowed_origin(origin);
        }
        if is_development {
            cors = cors.allowed_origin("http://127.0.0.1:5173");
        }

        App::new()
            // CORS must wrap before the logger
            .wrap(cors)
            .wrap(RequestLogger)
            .app_data(client.clone())
            // Registered ahead of the scope, which would otherwise claim these paths
            .service(
                SwaggerUi::new("/api/v1/docs/{_:.*}")
                    .url("/api/v1/openapi.json", openapi.clone()),
            )
            .service(web::scope("/api/v1").configure(api::configure_routes))
    });

    server.workers(worker_count).bind(&bind_address)?.run().await
}
