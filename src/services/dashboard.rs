//! Page view models for the dashboard.
//!
//! Each loader issues its independent client queries concurrently and waits
//! for all of them. The first failure aborts the whole view.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::models::{Execution, Project, ScoreHistory, TestResult};
use crate::services::client::ComplianceClient;
use crate::services::score::{ColorBand, ScoreClassification, bar_band, classify};

/// Display label of a runner type; unknown types display as-is.
pub fn runner_label(runner_type: &str) -> &str {
    match runner_type {
        "api" => "API",
        "security" => "Security",
        "lgpd" => "LGPD",
        "performance" => "Performance",
        "ui" => "UI",
        "regression" => "Regression",
        other => other,
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectCard {
    #[serde(flatten)]
    pub project: Project,
    pub classification: ScoreClassification,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectsOverview {
    pub projects: Vec<ProjectCard>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExecutionRow {
    #[serde(flatten)]
    pub execution: Execution,
    pub classification: ScoreClassification,
}

/// Latest score of one runner type.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RunnerScore {
    pub runner_type: String,
    pub label: String,
    pub score: f64,
    pub passed: u32,
    pub total: u32,
    pub band: ColorBand,
}

/// One execution's per-runner scores on the trend chart.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrendPoint {
    pub execution_id: String,
    pub recorded_at: Option<DateTime<Utc>>,
    pub scores: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectDetail {
    pub project: Project,
    /// Classification of the latest execution, or of `last_score` when there is none
    pub classification: ScoreClassification,
    pub latest_execution: Option<Execution>,
    pub runners: Vec<RunnerScore>,
    pub trend: Vec<TrendPoint>,
    pub executions: Vec<ExecutionRow>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExecutionDetail {
    pub execution: Execution,
    pub classification: ScoreClassification,
    /// Results with a `fail` or `error` status, in result order
    pub failures: Vec<TestResult>,
    pub results: Vec<TestResult>,
}

pub async fn load_projects_overview(client: &ComplianceClient) -> AppResult<ProjectsOverview> {
    let projects = client.list_projects().await?;
    Ok(ProjectsOverview {
        projects: projects
            .into_iter()
            .map(|project| ProjectCard {
                classification: classify(project.last_score),
                project,
            })
            .collect(),
    })
}

pub async fn load_project_detail(client: &ComplianceClient, id: &str) -> AppResult<ProjectDetail> {
    let (project, executions, history) = tokio::try_join!(
        client.get_project(id),
        client.list_project_executions(id, None),
        client.get_project_history(id, None),
    )?;

    let latest_execution = executions.first().cloned();
    let headline = latest_execution
        .as_ref()
        .map(|e| e.score)
        .or(project.last_score);

    Ok(ProjectDetail {
        classification: classify(headline),
        runners: latest_runner_scores(&history),
        trend: trend(&history),
        executions: executions
            .into_iter()
            .map(|execution| ExecutionRow {
                classification: classify(Some(execution.score)),
                execution,
            })
            .collect(),
        latest_execution,
        project,
    })
}

pub async fn load_execution_detail(
    client: &ComplianceClient,
    id: &str,
) -> AppResult<ExecutionDetail> {
    let (execution, results) =
        tokio::try_join!(client.get_execution(id), client.get_execution_results(id))?;

    let failures = results
        .iter()
        .filter(|r| r.status.is_failure())
        .cloned()
        .collect();

    Ok(ExecutionDetail {
        classification: classify(Some(execution.score)),
        execution,
        failures,
        results,
    })
}

/// First record of each runner type in newest-first history.
pub fn latest_runner_scores(history: &[ScoreHistory]) -> Vec<RunnerScore> {
    let mut runners: Vec<RunnerScore> = Vec::new();
    for record in history {
        if runners.iter().any(|r| r.runner_type == record.runner_type) {
            continue;
        }
        runners.push(RunnerScore {
            runner_type: record.runner_type.clone(),
            label: runner_label(&record.runner_type).to_string(),
            score: record.score,
            passed: record.passed,
            total: record.total,
            band: bar_band(record.score),
        });
    }
    runners
}

/// History grouped per execution, oldest first.
pub fn trend(history: &[ScoreHistory]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = Vec::new();
    for record in history {
        let index = match points
            .iter()
            .position(|p| p.execution_id == record.execution_id)
        {
            Some(index) => index,
            None => {
                points.push(TrendPoint {
                    execution_id: record.execution_id.clone(),
                    recorded_at: None,
                    scores: BTreeMap::new(),
                });
                points.len() - 1
            }
        };
        let point = &mut points[index];
        point
            .scores
            .insert(record.runner_type.clone(), record.score);
        if record.recorded_at.is_some() {
            point.recorded_at = record.recorded_at;
        }
    }
    // Undated points sort first
    points.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
    points
}
