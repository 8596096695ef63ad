#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use simillimum_gemini::client::{GeminiConfig, build_client};
use simillimum_render::render::PageRenderer;
use simillimum_web::state::AppState;

#[derive(Clone)]
struct Mock {
    status: StatusCode,
    body: Value,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

async fn handle(State(mock): State<Mock>) -> impl IntoResponse {
    mock.calls.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(mock.delay).await;
    (mock.status, Json(mock.body.clone()))
}

/// A running mock of the model endpoint.
pub struct MockGemini {
    pub url: String,
    pub calls: Arc<AtomicUsize>,
}

impl MockGemini {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub async fn spawn_gemini(status: StatusCode, body: Value, delay: Duration) -> MockGemini {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = Router::new().fallback(handle).with_state(Mock {
        status,
        body,
        delay,
        calls: calls.clone(),
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    MockGemini {
        url: format!("http://{addr}"),
        calls,
    }
}

pub fn analysis_json(summary: &str) -> Value {
    json!({
        "summary": summary,
        "totalSymptomsAnalyzed": 1,
        "rubricAnalysis": [
            { "kentRubric": "MIND - FEAR - death, of", "matches": [{ "remedyName": "Arsenicum Album", "grade": 3 }] }
        ],
        "remedies": [{
            "name": "Arsenicum",
            "relevanceScore": 90,
            "keyIndications": ["Restlessness"],
            "boerickeReference": "Great prostration.",
            "differentiation": "Fear with restlessness."
        }]
    })
}

pub fn envelope(text: &str) -> Value {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] }, "finishReason": "STOP" }],
        "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 20 }
    })
}

pub fn state_for(mock: &MockGemini) -> AppState {
    let gemini = build_client(GeminiConfig {
        api_key: "test-key-0123456789".to_string(),
        model_id: "gemini-test".to_string(),
        base_url: mock.url.clone(),
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    AppState::new(gemini, PageRenderer::new().unwrap())
}

pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = simillimum_web::app(state.clone())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn get_json(state: &AppState, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(state, Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

pub async fn post_json(state: &AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(state, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

pub async fn post_form(state: &AppState, uri: &str, form: &str) -> StatusCode {
    let request = Request::post(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(state, request).await.0
}

/// Poll the session until the in-flight analysis resolves.
pub async fn wait_until_settled(state: &AppState) -> Value {
    for _ in 0..100 {
        let (_, snapshot) = get_json(state, "/api/session").await;
        if snapshot["state"] != "analyzing" {
            return snapshot;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("analysis did not settle");
}
