//! E2E tests: HTTP routes of the dashboard server.

use serde_json::json;

use super::mock_backend::{MockBackend, Mode, unreachable_url};
use super::test_helpers::*;

#[actix_rt::test]
async fn test_projects_overview_route() {
    let app = create_test_app(client_for(&unreachable_url())).await;

    let (status, body) = get_json(&app, "/api/v1/projects").await;

    assert_eq!(status, 200);
    let projects = body["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0]["nome"], "Conduit");
    assert_eq!(projects[2]["classification"]["band"], "green");
}

#[actix_rt::test]
async fn test_project_detail_route() {
    let app = create_test_app(client_for(&unreachable_url())).await;

    let (status, body) = get_json(&app, &format!("/api/v1/projects/{}", CONDUIT)).await;

    assert_eq!(status, 200);
    assert_eq!(body["project"]["id"], CONDUIT);
    assert_eq!(body["executions"].as_array().unwrap().len(), 6);
    assert_eq!(body["runners"][0]["label"], "API");
}

#[actix_rt::test]
async fn test_malformed_id_is_rejected() {
    let app = create_test_app(client_for(&unreachable_url())).await;

    let (status, body) = get_json(&app, "/api/v1/projects/not-a-uuid").await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_unknown_project_is_not_found() {
    let app = create_test_app(client_for(&unreachable_url())).await;

    let (status, body) =
        get_json(&app, "/api/v1/projects/00000000-0000-4000-8000-000000000000").await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_rt::test]
async fn test_execution_detail_route() {
    let app = create_test_app(client_for(&unreachable_url())).await;

    let (status, body) = get_json(&app, &format!("/api/v1/executions/{}", FIRST_CONDUIT_RUN)).await;

    assert_eq!(status, 200);
    assert_eq!(body["results"].as_array().unwrap().len(), 18);
    assert_eq!(body["failures"].as_array().unwrap().len(), 7);
    assert_eq!(body["classification"]["label"], "Attention");
}

#[actix_rt::test]
async fn test_health_route_flags_demo_mode() {
    let app = create_test_app(client_for(&unreachable_url())).await;

    let (status, body) = get_json(&app, "/api/v1/health").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["demo_mode"], true);
    assert_eq!(body["backend"]["status"], "demo");
}

#[actix_rt::test]
async fn test_health_route_with_live_backend() {
    let mock = MockBackend::start(Mode::Healthy).await;
    let app = create_test_app(client_for(&mock.base_url)).await;

    let (status, body) = get_json(&app, "/api/v1/health").await;

    assert_eq!(status, 200);
    assert_eq!(body["demo_mode"], false);
    assert_eq!(body["backend"]["status"], "ok");
}

#[actix_rt::test]
async fn test_health_route_stays_up_on_unreadable_backend_health() {
    let mock = MockBackend::start(Mode::Malformed).await;
    let app = create_test_app(client_for(&mock.base_url)).await;

    let (status, body) = get_json(&app, "/api/v1/health").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["demo_mode"], false);
    assert_eq!(body["backend"]["status"], "unavailable");
    assert_eq!(mock.hits(), vec!["GET /api/health"]);
}

#[actix_rt::test]
async fn test_run_route_reports_unreachable_backend() {
    let app = create_test_app(client_for(&unreachable_url())).await;

    let (status, body) =
        post_json(&app, "/api/v1/runs", json!({"project_name": "Conduit"})).await;

    assert_eq!(status, 502);
    assert_eq!(body["error"], "UPSTREAM_UNAVAILABLE");
}

#[actix_rt::test]
async fn test_run_route_passes_backend_status_through() {
    let mock = MockBackend::start(Mode::Failing(409)).await;
    let app = create_test_app(client_for(&mock.base_url)).await;

    let (status, body) =
        post_json(&app, "/api/v1/runs", json!({"project_name": "Conduit", "confirm": true})).await;

    assert_eq!(status, 409);
    assert_eq!(body["error"], "UPSTREAM_ERROR");
}

#[actix_rt::test]
async fn test_run_route_validates_name() {
    let mock = MockBackend::start(Mode::Healthy).await;
    let app = create_test_app(client_for(&mock.base_url)).await;

    let (status, body) = post_json(&app, "/api/v1/runs", json!({"project_name": ""})).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
    assert!(mock.hits().is_empty());
}
