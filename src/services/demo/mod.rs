//! Deterministic demo dataset.
//!
//! Stands in for the compliance backend when it cannot be reached. Projects
//! and executions come from fixed tables; test results are regenerated on
//! every request as a pure function of the execution id, and score history
//! is always re-aggregated from those results so the two can never drift.

pub mod catalog;
pub mod rng;

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::{Execution, Project, ScoreHistory, TestCategory, TestResult, TestStatus};
use crate::services::score::percentage;

use catalog::{
    DEMO_ENVIRONMENT, EXECUTION_PLANS, FAILURE_DETAILS, PROJECTS, REFERENCE_EPOCH_SECS,
    TEST_TEMPLATES, TESTS_PER_EXECUTION,
};
use rng::{SeededRng, key_hash, shuffled_indices};

static DATASET: LazyLock<DemoDataset> = LazyLock::new(DemoDataset::build);

fn timestamp(unix_secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(unix_secs)
}

/// Read-only demo projects and executions.
#[derive(Debug, Clone)]
pub struct DemoDataset {
    projects: Vec<Project>,
    executions: Vec<Execution>,
}

impl DemoDataset {
    /// The process-wide dataset, built on first use.
    pub fn global() -> &'static DemoDataset {
        &DATASET
    }

    /// Build the dataset from the static tables.
    pub fn build() -> Self {
        let projects = PROJECTS
            .iter()
            .map(|seed| Project {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                description: seed.description.to_string(),
                stack: seed.stack.to_string(),
                last_score: Some(seed.last_score),
                last_execution_at: Some(timestamp(seed.last_execution_at)),
                created_at: Some(timestamp(seed.created_at)),
            })
            .collect::<Vec<_>>();

        let mut executions = Vec::new();
        for plan in &EXECUTION_PLANS {
            let project_name = PROJECTS
                .iter()
                .find(|p| p.id == plan.project_id)
                .map(|p| p.name)
                .unwrap_or_default();

            for (i, id) in plan.ids.iter().enumerate() {
                let score = plan.scores[i];
                let total = TESTS_PER_EXECUTION;
                let passed = (score / 100.0 * f64::from(total)).round() as u32;
                let duration_ms = 1200 + i as i64 * 400 + (i as i64 % 3) * 200;
                let started_at = timestamp(REFERENCE_EPOCH_SECS)
                    - TimeDelta::days(plan.days_ago[i])
                    + TimeDelta::hours(10 + i as i64);

                executions.push(Execution {
                    id: id.to_string(),
                    project_id: plan.project_id.to_string(),
                    project_name: project_name.to_string(),
                    environment: DEMO_ENVIRONMENT.to_string(),
                    started_at,
                    finished_at: Some(started_at + TimeDelta::milliseconds(duration_ms)),
                    score,
                    total,
                    passed,
                    failed: total - passed,
                    errors: 0,
                    skipped: 0,
                    duration_ms: duration_ms as f64,
                });
            }
        }

        DemoDataset {
            projects,
            executions,
        }
    }

    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn project(&self, id: &str) -> Option<Project> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    /// Executions, newest first, optionally restricted to one project.
    pub fn executions(&self, project_id: Option<&str>, limit: u32) -> Vec<Execution> {
        let mut executions: Vec<Execution> = self
            .executions
            .iter()
            .filter(|e| project_id.is_none_or(|id| e.project_id == id))
            .cloned()
            .collect();
        executions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        executions.truncate(limit as usize);
        executions
    }

    pub fn execution(&self, id: &str) -> Option<Execution> {
        self.find_execution(id).cloned()
    }

    fn find_execution(&self, id: &str) -> Option<&Execution> {
        self.executions.iter().find(|e| e.id == id)
    }

    /// Per-test results of an execution; empty for unknown ids.
    ///
    /// The generator is seeded with the id's hash. It is consumed first by
    /// the shuffle that picks the failing templates, then per template in
    /// declared order: one draw for the detail index, one for the duration.
    /// The number of failing results always equals the execution's `failed`.
    pub fn test_results(&self, execution_id: &str) -> Vec<TestResult> {
        let Some(execution) = self.find_execution(execution_id) else {
            return Vec::new();
        };

        let mut rng = SeededRng::new(key_hash(execution_id));
        let order = shuffled_indices(&mut rng, TEST_TEMPLATES.len());
        let failing: HashSet<usize> = order
            .iter()
            .take(execution.failed as usize)
            .copied()
            .collect();

        let prefix: String = execution_id.chars().take(8).collect();

        TEST_TEMPLATES
            .iter()
            .enumerate()
            .map(|(i, template)| {
                let status = if failing.contains(&i) {
                    TestStatus::Fail
                } else {
                    TestStatus::Pass
                };
                let detail_index = rng.below(FAILURE_DETAILS.len());
                let duration_ms = ((50.0 + rng.next_f64() * 750.0) * 10.0).round() / 10.0;

                TestResult {
                    id: format!("tr-{}-{:03}", prefix, i),
                    name: template.name.to_string(),
                    category: template.category.as_str().to_string(),
                    status,
                    duration_ms,
                    detail: if status.is_failure() {
                        FAILURE_DETAILS[detail_index].to_string()
                    } else {
                        String::new()
                    },
                    severity: template.severity.to_string(),
                    group: template.group.to_string(),
                }
            })
            .collect()
    }

    /// Per-category scores of every execution of a project, newest first.
    ///
    /// Each execution contributes one record per category that has tests,
    /// recorded at the execution's finish time. At most `limit` records.
    pub fn score_history(&self, project_id: &str, limit: u32) -> Vec<ScoreHistory> {
        let mut history = Vec::new();

        for execution in self.executions(Some(project_id), u32::MAX) {
            let results = self.test_results(&execution.id);

            for category in TestCategory::ALL {
                let in_category = results.iter().filter(|r| r.category == category.as_str());
                let (total, passed) = in_category.fold((0u32, 0u32), |(total, passed), r| {
                    (total + 1, passed + u32::from(r.status == TestStatus::Pass))
                });
                let Some(score) = percentage(passed, total) else {
                    continue;
                };

                history.push(ScoreHistory {
                    execution_id: execution.id.clone(),
                    runner_type: category.as_str().to_string(),
                    score,
                    total,
                    passed,
                    recorded_at: execution.finished_at,
                });
            }
        }

        history.truncate(limit as usize);
        history
    }
}
