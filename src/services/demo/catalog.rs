//! Static tables behind the demo dataset.

use crate::models::TestCategory;

/// Tests per demo execution.
pub const TESTS_PER_EXECUTION: u32 = 18;

/// Executions per demo project.
pub const EXECUTIONS_PER_PROJECT: usize = 6;

/// 2026-02-19T00:00:00Z; execution start times count back from here.
pub const REFERENCE_EPOCH_SECS: i64 = 1_771_459_200;

/// Environment label of every demo execution.
pub const DEMO_ENVIRONMENT: &str = "local";

pub struct ProjectSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub stack: &'static str,
    pub last_score: f64,
    /// Unix seconds
    pub last_execution_at: i64,
    /// Unix seconds
    pub created_at: i64,
}

/// Six executions of one project with an improving score.
pub struct ExecutionPlan {
    pub project_id: &'static str,
    pub ids: [&'static str; EXECUTIONS_PER_PROJECT],
    /// Non-decreasing
    pub scores: [f64; EXECUTIONS_PER_PROJECT],
    /// Days before [`REFERENCE_EPOCH_SECS`]
    pub days_ago: [i64; EXECUTIONS_PER_PROJECT],
}

pub struct TestTemplate {
    pub name: &'static str,
    pub category: TestCategory,
    pub group: &'static str,
    pub severity: &'static str,
}

const CONDUIT: &str = "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d";
const HEALTHTRACK: &str = "b2c3d4e5-f6a7-4b8c-9d0e-1f2a3b4c5d6e";
const EDUCONNECT: &str = "c3d4e5f6-a7b8-4c9d-0e1f-2a3b4c5d6e7f";

pub static PROJECTS: [ProjectSeed; 3] = [
    ProjectSeed {
        id: CONDUIT,
        name: "Conduit",
        description: "RealWorld API: blogging platform with JWT authentication",
        stack: "node-express",
        last_score: 88.9,
        last_execution_at: 1_771_338_600, // 2026-02-17T14:30:00Z
        created_at: 1_768_039_200,        // 2026-01-10T10:00:00Z
    },
    ProjectSeed {
        id: HEALTHTRACK,
        name: "HealthTrack",
        description: "Patient monitoring system exposed as a REST API",
        stack: "python-fastapi",
        last_score: 77.8,
        last_execution_at: 1_771_260_300, // 2026-02-16T16:45:00Z
        created_at: 1_768_208_400,        // 2026-01-12T09:00:00Z
    },
    ProjectSeed {
        id: EDUCONNECT,
        name: "EduConnect",
        description: "Learning platform managing courses and students",
        stack: "react-django",
        last_score: 94.4,
        last_execution_at: 1_771_413_600, // 2026-02-18T11:20:00Z
        created_at: 1_767_861_000,        // 2026-01-08T08:30:00Z
    },
];

pub static EXECUTION_PLANS: [ExecutionPlan; 3] = [
    ExecutionPlan {
        project_id: CONDUIT,
        ids: [
            "e1a00001-0001-4000-8000-000000000001",
            "e1a00001-0002-4000-8000-000000000002",
            "e1a00001-0003-4000-8000-000000000003",
            "e1a00001-0004-4000-8000-000000000004",
            "e1a00001-0005-4000-8000-000000000005",
            "e1a00001-0006-4000-8000-000000000006",
        ],
        scores: [61.1, 66.7, 72.2, 77.8, 83.3, 88.9],
        days_ago: [28, 24, 19, 14, 8, 3],
    },
    ExecutionPlan {
        project_id: HEALTHTRACK,
        ids: [
            "e2b00001-0001-4000-8000-000000000001",
            "e2b00001-0002-4000-8000-000000000002",
            "e2b00001-0003-4000-8000-000000000003",
            "e2b00001-0004-4000-8000-000000000004",
            "e2b00001-0005-4000-8000-000000000005",
            "e2b00001-0006-4000-8000-000000000006",
        ],
        scores: [50.0, 55.6, 61.1, 66.7, 72.2, 77.8],
        days_ago: [30, 25, 20, 15, 9, 4],
    },
    ExecutionPlan {
        project_id: EDUCONNECT,
        ids: [
            "e3c00001-0001-4000-8000-000000000001",
            "e3c00001-0002-4000-8000-000000000002",
            "e3c00001-0003-4000-8000-000000000003",
            "e3c00001-0004-4000-8000-000000000004",
            "e3c00001-0005-4000-8000-000000000005",
            "e3c00001-0006-4000-8000-000000000006",
        ],
        scores: [72.2, 77.8, 83.3, 88.9, 88.9, 94.4],
        days_ago: [27, 22, 17, 12, 7, 2],
    },
];

const fn api(name: &'static str, group: &'static str, severity: &'static str) -> TestTemplate {
    TestTemplate {
        name,
        category: TestCategory::Api,
        group,
        severity,
    }
}

const fn security(name: &'static str, group: &'static str, severity: &'static str) -> TestTemplate {
    TestTemplate {
        name,
        category: TestCategory::Security,
        group,
        severity,
    }
}

/// 10 API tests followed by 8 security tests. Order is significant: result
/// ids and the fail set are indexed by position.
pub static TEST_TEMPLATES: [TestTemplate; TESTS_PER_EXECUTION as usize] = [
    api("GET /api/users - list users", "users", "medium"),
    api("POST /api/users - create user", "users", "high"),
    api("GET /api/users/:id - find by id", "users", "medium"),
    api("PUT /api/users/:id - update user", "users", "medium"),
    api("DELETE /api/users/:id - remove user", "users", "high"),
    api("POST /api/auth/login - authentication", "authentication", "critical"),
    api("POST /api/auth/register - sign up", "authentication", "critical"),
    api("GET /api/articles - list articles", "articles", "low"),
    api("POST /api/articles - create article", "articles", "medium"),
    api("GET /api/health - healthcheck", "infrastructure", "low"),
    security("SQL Injection - login endpoint", "injection", "critical"),
    security("XSS - search field", "injection", "critical"),
    security("CSRF - edit form", "csrf", "high"),
    security("Security Headers - X-Frame-Options", "headers", "medium"),
    security("Security Headers - Content-Security-Policy", "headers", "medium"),
    security("Security Headers - X-Content-Type-Options", "headers", "low"),
    security("CORS - allowed origins", "cors", "high"),
    security("Rate Limiting - login brute force", "rate-limit", "high"),
];

pub static FAILURE_DETAILS: [&str; 8] = [
    "Expected status 200, got 500 - Internal Server Error",
    "Expected status 201, got 422 - Validation Error: field 'email' required",
    "Response time 3200ms exceeded threshold 2000ms",
    "Header 'X-Frame-Options' not found in response",
    "Header 'Content-Security-Policy' not found in response",
    "Endpoint vulnerable to SQL injection - payload: ' OR 1=1 --",
    "CORS misconfiguration - wildcard origin accepted",
    "Rate limit not enforced - 100 requests in 2s without block",
];
