//! Resilient compliance backend client.
//!
//! Every query first tries the live backend once. When that attempt fails
//! with an HTTP or transport error the matching demo dataset query answers
//! instead, so callers cannot tell the two apart. Identifiers unknown to the
//! demo dataset still fail with [`AppError::NotFound`]. Run submission never
//! falls back.

pub mod transport;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::config::BackendSettings;
use crate::error::{AppError, AppResult};
use crate::models::{
    DEFAULT_EXECUTION_LIMIT, DEFAULT_HISTORY_LIMIT, Execution, HealthStatus, Project, RunRequest,
    RunResponse, ScoreHistory, TestResult,
};
use crate::services::demo::DemoDataset;

pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

/// Pick between a live attempt and the demo answer.
///
/// Recoverable failures ([`AppError::is_recoverable`]) are replaced by
/// `fallback()`; successes and every other error pass through untouched.
pub fn resolve<T>(
    operation: &str,
    attempt: AppResult<T>,
    fallback: impl FnOnce() -> AppResult<T>,
) -> AppResult<T> {
    match attempt {
        Ok(value) => Ok(value),
        Err(err) if err.is_recoverable() => {
            warn!(
                operation = %operation,
                cause = %err,
                "Backend unavailable, serving demo data"
            );
            fallback()
        }
        Err(err) => Err(err),
    }
}

/// Client facade over the compliance backend with demo fallback.
#[derive(Clone)]
pub struct ComplianceClient {
    transport: Arc<dyn Transport>,
    demo: &'static DemoDataset,
}

impl ComplianceClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        ComplianceClient {
            transport,
            demo: DemoDataset::global(),
        }
    }

    /// Client talking HTTP to the configured backend.
    pub fn from_settings(settings: &BackendSettings) -> AppResult<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(settings)?)))
    }

    /// One live round trip: non-2xx becomes [`AppError::Http`], a body that
    /// does not decode becomes [`AppError::Decode`].
    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<T> {
        let path = request.path.clone();
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            debug!("Backend answered {} for {}", response.status, path);
            return Err(AppError::Http {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|e| AppError::Decode(format!("{} ({})", e, path)))
    }

    pub async fn list_projects(&self) -> AppResult<Vec<Project>> {
        let attempt = self.fetch(ApiRequest::get("/api/projects")).await;
        resolve("list_projects", attempt, || Ok(self.demo.projects()))
    }

    pub async fn get_project(&self, id: &str) -> AppResult<Project> {
        let attempt = self
            .fetch(ApiRequest::get(format!("/api/projects/{}", encode(id))))
            .await;
        resolve("get_project", attempt, || {
            self.demo
                .project(id)
                .ok_or_else(|| AppError::NotFound(format!("Project {}", id)))
        })
    }

    /// Latest executions of a project, newest first (default limit 20).
    pub async fn list_project_executions(
        &self,
        id: &str,
        limit: Option<u32>,
    ) -> AppResult<Vec<Execution>> {
        let limit = limit.unwrap_or(DEFAULT_EXECUTION_LIMIT);
        let attempt = self
            .fetch(ApiRequest::get(format!(
                "/api/projects/{}/executions?limit={}",
                encode(id),
                limit
            )))
            .await;
        resolve("list_project_executions", attempt, || {
            self.demo
                .project(id)
                .map(|_| self.demo.executions(Some(id), limit))
                .ok_or_else(|| AppError::NotFound(format!("Project {}", id)))
        })
    }

    /// Per-runner score history of a project (default limit 30).
    pub async fn get_project_history(
        &self,
        id: &str,
        limit: Option<u32>,
    ) -> AppResult<Vec<ScoreHistory>> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        let attempt = self
            .fetch(ApiRequest::get(format!(
                "/api/projects/{}/history?limit={}",
                encode(id),
                limit
            )))
            .await;
        resolve("get_project_history", attempt, || {
            self.demo
                .project(id)
                .map(|_| self.demo.score_history(id, limit))
                .ok_or_else(|| AppError::NotFound(format!("Project {}", id)))
        })
    }

    /// Executions across projects, newest first (default limit 20).
    pub async fn list_executions(
        &self,
        project_id: Option<&str>,
        limit: Option<u32>,
    ) -> AppResult<Vec<Execution>> {
        let limit = limit.unwrap_or(DEFAULT_EXECUTION_LIMIT);
        let mut path = format!("/api/executions?limit={}", limit);
        if let Some(project_id) = project_id {
            path.push_str(&format!("&project_id={}", encode(project_id)));
        }
        let attempt = self.fetch(ApiRequest::get(path)).await;
        resolve("list_executions", attempt, || {
            Ok(self.demo.executions(project_id, limit))
        })
    }

    pub async fn get_execution(&self, id: &str) -> AppResult<Execution> {
        let attempt = self
            .fetch(ApiRequest::get(format!("/api/executions/{}", encode(id))))
            .await;
        resolve("get_execution", attempt, || {
            self.demo
                .execution(id)
                .ok_or_else(|| AppError::NotFound(format!("Execution {}", id)))
        })
    }

    /// Results of one execution. Unknown ids yield an empty list on the demo path.
    pub async fn get_execution_results(&self, id: &str) -> AppResult<Vec<TestResult>> {
        let attempt = self
            .fetch(ApiRequest::get(format!(
                "/api/executions/{}/results",
                encode(id)
            )))
            .await;
        resolve("get_execution_results", attempt, || {
            Ok(self.demo.test_results(id))
        })
    }

    /// Ask the backend to run the suite. Requires a live backend; failures
    /// propagate unchanged.
    pub async fn submit_run(&self, request: &RunRequest) -> AppResult<RunResponse> {
        request.validate()?;
        let body = serde_json::to_value(request)?;
        self.fetch(ApiRequest::post("/api/runs", body)).await
    }

    /// Backend health. An unreachable backend reports [`HealthStatus::demo`]
    /// rather than an error, so callers can tell they are looking at demo data.
    pub async fn health(&self) -> AppResult<HealthStatus> {
        match self.fetch(ApiRequest::get("/api/health")).await {
            Ok(status) => Ok(status),
            Err(err) if err.is_recoverable() => {
                warn!(cause = %err, "Backend health check failed, reporting demo mode");
                Ok(HealthStatus::demo())
            }
            Err(err) => Err(err),
        }
    }
}
