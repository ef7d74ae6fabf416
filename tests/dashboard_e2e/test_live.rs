//! E2E tests: backend reachable, live data served.

use compliance_dashboard_lib::error::AppError;
use compliance_dashboard_lib::models::RunRequest;
use compliance_dashboard_lib::services::dashboard;

use super::mock_backend::{LIVE_EXECUTION_ID, LIVE_PROJECT_ID, MockBackend, Mode};
use super::test_helpers::*;

#[actix_rt::test]
async fn test_live_projects_are_returned_untouched() {
    let mock = MockBackend::start(Mode::Healthy).await;
    let client = client_for(&mock.base_url);

    let projects = client.list_projects().await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "LiveProject");
    assert_eq!(projects[0].stack, "python-fastapi");
    assert_eq!(mock.hits(), vec!["GET /api/projects"]);
}

#[actix_rt::test]
async fn test_live_limits_are_sent_as_query() {
    let mock = MockBackend::start(Mode::Healthy).await;
    let client = client_for(&mock.base_url);

    let executions = client
        .list_project_executions(LIVE_PROJECT_ID, None)
        .await
        .unwrap();
    let history = client
        .get_project_history(LIVE_PROJECT_ID, Some(5))
        .await
        .unwrap();

    assert_eq!(executions.len(), 1);
    assert_eq!(executions[0].environment, "staging");
    assert_eq!(history.len(), 2);
    assert_eq!(
        mock.hits(),
        vec![
            format!("GET /api/projects/{}/executions", LIVE_PROJECT_ID),
            format!("GET /api/projects/{}/history", LIVE_PROJECT_ID),
        ]
    );
}

#[actix_rt::test]
async fn test_live_404_falls_back_to_demo_lookup() {
    let mock = MockBackend::start(Mode::Healthy).await;
    let client = client_for(&mock.base_url);

    // The backend does not know the demo project, the demo dataset does
    let project = client.get_project(CONDUIT).await.unwrap();
    assert_eq!(project.name, "Conduit");

    let err = client
        .get_project("00000000-0000-4000-8000-000000000000")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[actix_rt::test]
async fn test_live_project_detail_view() {
    let mock = MockBackend::start(Mode::Healthy).await;
    let client = client_for(&mock.base_url);

    let detail = dashboard::load_project_detail(&client, LIVE_PROJECT_ID)
        .await
        .unwrap();

    assert_eq!(detail.project.name, "LiveProject");
    assert_eq!(detail.classification.label, "Attention");
    assert_eq!(detail.executions.len(), 1);
    assert_eq!(detail.runners.len(), 2);
    assert_eq!(detail.runners[1].label, "LGPD");
    assert_eq!(detail.trend.len(), 1);
    assert_eq!(mock.hits().len(), 3);
}

#[actix_rt::test]
async fn test_live_execution_detail_lists_failures() {
    let mock = MockBackend::start(Mode::Healthy).await;
    let client = client_for(&mock.base_url);

    let detail = dashboard::load_execution_detail(&client, LIVE_EXECUTION_ID)
        .await
        .unwrap();

    assert_eq!(detail.results.len(), 2);
    assert_eq!(detail.failures.len(), 1);
    assert_eq!(detail.failures[0].detail, "No 429 after 100 requests");
}

#[actix_rt::test]
async fn test_live_run_submission() {
    let mock = MockBackend::start(Mode::Healthy).await;
    let client = client_for(&mock.base_url);

    let response = client
        .submit_run(&RunRequest::new("LiveProject"))
        .await
        .unwrap();

    assert_eq!(response.execution_id.as_deref(), Some(LIVE_EXECUTION_ID));
    assert_eq!(response.total, 2);
    assert_eq!(mock.hits(), vec!["POST /api/runs"]);
}

#[actix_rt::test]
async fn test_live_health_is_not_demo() {
    let mock = MockBackend::start(Mode::Healthy).await;
    let client = client_for(&mock.base_url);

    let health = client.health().await.unwrap();

    assert_eq!(health.status, "ok");
    assert!(!health.is_demo());
}
