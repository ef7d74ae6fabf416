//! Mock compliance backend for E2E tests.
//!
//! Starts an in-process HTTP server answering the backend routes with a small
//! live dataset, or failing every request in a configurable way.

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

pub const LIVE_PROJECT_ID: &str = "0f0e0d0c-1111-4222-8333-444455556666";
pub const LIVE_EXECUTION_ID: &str = "0f0e0d0c-aaaa-4bbb-8ccc-dddddddddddd";

/// How the mock answers.
#[derive(Debug, Clone, Copy)]
pub enum Mode {
    /// Serve the live dataset
    Healthy,
    /// Answer every request with this status
    Failing(u16),
    /// Answer 200 with a body that is not JSON
    Malformed,
}

pub struct MockState {
    pub mode: Mode,
    /// `METHOD path` of every request received
    pub hits: Vec<String>,
}

fn live_project() -> Value {
    json!({
        "id": LIVE_PROJECT_ID,
        "nome": "LiveProject",
        "descricao": "Served by the mock backend",
        "stack": "python-fastapi",
        "last_score": 50.0,
        "last_execution_at": "2026-03-01T10:00:00Z",
        "created_at": "2026-01-01T00:00:00Z"
    })
}

fn live_execution() -> Value {
    json!({
        "id": LIVE_EXECUTION_ID,
        "project_id": LIVE_PROJECT_ID,
        "projeto_nome": "LiveProject",
        "ambiente": "staging",
        "started_at": "2026-03-01T10:00:00Z",
        "finished_at": "2026-03-01T10:00:02Z",
        "score": 50.0,
        "total": 2,
        "passed": 1,
        "failed": 1,
        "errors": 0,
        "skipped": 0,
        "duracao_ms": 2000.0
    })
}

fn live_results() -> Value {
    json!([
        {
            "id": "tr-live-000",
            "nome": "Health endpoint",
            "tipo": "api",
            "status": "pass",
            "duracao_ms": 12.5,
            "detalhes": "",
            "severidade": "info",
            "grupo": "health"
        },
        {
            "id": "tr-live-001",
            "nome": "Rate limiting",
            "tipo": "lgpd",
            "status": "fail",
            "duracao_ms": 80.0,
            "detalhes": "No 429 after 100 requests",
            "severidade": "high",
            "grupo": "limits"
        }
    ])
}

fn live_history() -> Value {
    json!([
        {
            "execution_id": LIVE_EXECUTION_ID,
            "runner_type": "api",
            "score": 100.0,
            "total": 1,
            "passed": 1,
            "recorded_at": "2026-03-01T10:00:02Z"
        },
        {
            "execution_id": LIVE_EXECUTION_ID,
            "runner_type": "lgpd",
            "score": 0.0,
            "total": 1,
            "passed": 0,
            "recorded_at": "2026-03-01T10:00:02Z"
        }
    ])
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"detail": "not found"}))
}

fn healthy_response(req: &HttpRequest) -> HttpResponse {
    let segments: Vec<&str> = req
        .path()
        .trim_start_matches("/api/")
        .split('/')
        .collect();

    match (req.method().as_str(), segments.as_slice()) {
        ("GET", ["health"]) => {
            HttpResponse::Ok().json(json!({"status": "ok", "service": "coder-compliance-backend"}))
        }
        ("GET", ["projects"]) => HttpResponse::Ok().json(json!([live_project()])),
        ("GET", ["projects", id]) if *id == LIVE_PROJECT_ID => {
            HttpResponse::Ok().json(live_project())
        }
        ("GET", ["projects", id, "executions"]) if *id == LIVE_PROJECT_ID => {
            HttpResponse::Ok().json(json!([live_execution()]))
        }
        ("GET", ["projects", id, "history"]) if *id == LIVE_PROJECT_ID => {
            HttpResponse::Ok().json(live_history())
        }
        ("GET", ["executions"]) => HttpResponse::Ok().json(json!([live_execution()])),
        ("GET", ["executions", id]) if *id == LIVE_EXECUTION_ID => {
            HttpResponse::Ok().json(live_execution())
        }
        ("GET", ["executions", id, "results"]) if *id == LIVE_EXECUTION_ID => {
            HttpResponse::Ok().json(live_results())
        }
        ("POST", ["runs"]) => HttpResponse::Ok().json(json!({
            "execution_id": LIVE_EXECUTION_ID,
            "score": 50.0,
            "total": 2,
            "passed": 1,
            "failed": 1,
            "message": "Execution finished"
        })),
        _ => not_found(),
    }
}

async fn handle(req: HttpRequest, state: web::Data<Arc<Mutex<MockState>>>) -> HttpResponse {
    let mode = {
        let mut state = state.lock().unwrap();
        state.hits.push(format!("{} {}", req.method(), req.path()));
        state.mode
    };

    match mode {
        Mode::Healthy => healthy_response(&req),
        Mode::Failing(status) => {
            HttpResponse::build(StatusCode::from_u16(status).unwrap()).body("backend failure")
        }
        Mode::Malformed => HttpResponse::Ok()
            .content_type("text/html")
            .body("<html>maintenance</html>"),
    }
}

/// Mock backend listening on an ephemeral port.
pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    /// Start the mock backend on an ephemeral port.
    pub async fn start(mode: Mode) -> Self {
        let state = Arc::new(Mutex::new(MockState {
            mode,
            hits: Vec::new(),
        }));

        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
        let port = listener.local_addr().unwrap().port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let state_data = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state_data.clone()))
                .default_service(web::route().to(handle))
        })
        .workers(1)
        .listen(listener)
        .expect("failed to listen")
        .disable_signals()
        .run();

        // Lives until the test's runtime shuts down
        tokio::spawn(server);

        MockBackend { base_url, state }
    }

    /// Requests received so far.
    pub fn hits(&self) -> Vec<String> {
        self.state.lock().unwrap().hits.clone()
    }
}

/// URL of a port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
