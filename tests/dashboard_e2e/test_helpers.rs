//! Shared test helpers for dashboard E2E tests.

use actix_web::{App, dev::ServiceResponse, test, web};
use compliance_dashboard_lib::api;
use compliance_dashboard_lib::config::BackendSettings;
use compliance_dashboard_lib::services::ComplianceClient;
use serde_json::Value;
use std::time::Duration;

/// Demo project and execution ids served when the backend is down.
pub const CONDUIT: &str = "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d";
pub const FIRST_CONDUIT_RUN: &str = "e1a00001-0001-4000-8000-000000000001";

/// Client for the backend at `base_url` with short test timeouts.
pub fn client_for(base_url: &str) -> ComplianceClient {
    let mut settings = BackendSettings::new(base_url);
    settings.connect_timeout = Duration::from_secs(1);
    settings.request_timeout = Duration::from_secs(5);
    ComplianceClient::from_settings(&settings).expect("failed to build client")
}

/// Create a test dashboard app around `client`.
pub async fn create_test_app(
    client: ComplianceClient,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(client))
            .service(web::scope("/api/v1").configure(api::configure_routes)),
    )
    .await
}

/// GET `uri` and return status and JSON body.
pub async fn get_json<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// POST `body` to `uri` and return status and JSON body.
pub async fn post_json<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}
