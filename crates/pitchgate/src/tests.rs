//! Integration tests for the gateway.
//!
//! Each test spawns the real router on a random port against a stub
//! Ollama-compatible upstream, also on a random port.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::config::Config;
use crate::limiter::RateLimiter;
use crate::upstream::Upstream;
use crate::{AppState, create_router};

fn test_config(upstream_url: String) -> Config {
    Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        upstream_url,
        default_model: "test-model:latest".to_string(),
        min_interval: Duration::from_millis(0),
        request_timeout: Duration::from_secs(5),
        retry_delay: Duration::from_millis(50),
        retry_budget: 1,
        log_level: "warn".to_string(),
    }
}

async fn spawn_gateway(config: Config) -> String {
    let state = AppState {
        upstream: Arc::new(Upstream::new(&config).unwrap()),
        limiter: Arc::new(RateLimiter::new(config.min_interval)),
        config: Arc::new(config),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Minimal stand-in for the Ollama API: /api/generate echoes the model,
/// /api/tags lists two models.
async fn spawn_stub_upstream() -> String {
    let app = Router::new()
        .route(
            "/api/generate",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body.get("stream"), Some(&json!(false)));
                Json(json!({
                    "response": "hi",
                    "model": body.get("model").cloned().unwrap_or_default(),
                    "done": true,
                    "eval_count": 7,
                }))
            }),
        )
        .route(
            "/api/tags",
            get(|| async { Json(json!({ "models": [ { "name": "alpha" }, { "name": "beta" } ] })) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Upstream that answers every request with 503.
async fn spawn_broken_upstream() -> String {
    async fn unavailable() -> (StatusCode, &'static str) {
        (StatusCode::SERVICE_UNAVAILABLE, "model loading")
    }
    let app = Router::new()
        .route("/api/generate", post(unavailable))
        .route("/api/tags", get(unavailable));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Upstream that drops the first `drop_count` connections without a byte of
/// response, then serves normally. Exercises the transient-error retry.
async fn spawn_flaky_upstream(drop_count: usize) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        for _ in 0..drop_count {
            let (socket, _) = listener.accept().await.unwrap();
            drop(socket);
        }
        let app = Router::new().route(
            "/api/generate",
            post(|| async {
                Json(json!({ "response": "recovered", "model": "test-model:latest", "done": true }))
            }),
        );
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A URL nothing listens on.
async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_chat_end_to_end() {
    let upstream = spawn_stub_upstream().await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{gateway}/api/chat"))
        .json(&json!({ "prompt": "hello", "model": "m1" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["response"], json!("hi"));
    assert_eq!(body["model"], json!("m1"));
    assert_eq!(body["done"], json!(true));
    assert_eq!(body["eval_count"], json!(7));
}

#[tokio::test]
async fn test_chat_alias_route() {
    let upstream = spawn_stub_upstream().await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{gateway}/api/ollama/chat"))
        .json(&json!({ "prompt": "hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    // No model in the request: the configured default is forwarded.
    assert_eq!(body["model"], json!("test-model:latest"));
}

#[tokio::test]
async fn test_chat_malformed_json_is_400() {
    let upstream = spawn_stub_upstream().await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{gateway}/api/chat"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("Invalid request body"));
}

#[tokio::test]
async fn test_chat_upstream_error_is_500() {
    let upstream = spawn_broken_upstream().await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{gateway}/api/chat"))
        .json(&json!({ "prompt": "hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["details"]["statusCode"], json!(503));
    assert!(body["error"].as_str().unwrap().contains("HTTP 503"));
}

#[tokio::test]
async fn test_models_success() {
    let upstream = spawn_stub_upstream().await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let resp = reqwest::get(format!("{gateway}/api/models")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["models"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_models_unreachable_upstream_is_500() {
    let upstream = unreachable_url().await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let resp = reqwest::get(format!("{gateway}/api/models")).await.unwrap();
    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["models"], json!([]));
}

#[tokio::test]
async fn test_probe_is_200_even_when_upstream_is_down() {
    let upstream = unreachable_url().await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let resp = reqwest::get(format!("{gateway}/api/test")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Connection failed"));
    assert_eq!(body["models"], json!(0));
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_probe_reports_model_count() {
    let upstream = spawn_stub_upstream().await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let resp = reqwest::get(format!("{gateway}/api/test")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Ollama connection successful"));
    assert_eq!(body["models"], json!(2));
}

#[tokio::test]
async fn test_not_found_split() {
    let upstream = spawn_stub_upstream().await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let resp = reqwest::get(format!("{gateway}/api/bogus")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], json!("Endpoint not found"));

    let resp = reqwest::get(format!("{gateway}/bogus")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], json!("Not found"));
}

#[tokio::test]
async fn test_cors_preflight() {
    let upstream = spawn_stub_upstream().await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let client = reqwest::Client::new();
    let resp = client
        .request(reqwest::Method::OPTIONS, format!("{gateway}/api/chat"))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_rate_limiter_spaces_requests() {
    let upstream = spawn_stub_upstream().await;
    let mut config = test_config(upstream);
    config.min_interval = Duration::from_millis(100);
    let gateway = spawn_gateway(config).await;

    let client = reqwest::Client::new();
    let start = Instant::now();
    for _ in 0..3 {
        let resp = client
            .get(format!("{gateway}/api/test"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }
    // Three requests with a 100ms floor: the third starts no sooner than
    // ~200ms after the first began.
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_retry_recovers_after_dropped_connection() {
    let upstream = spawn_flaky_upstream(1).await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{gateway}/api/chat"))
        .json(&json!({ "prompt": "hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["response"], json!("recovered"));
}

#[tokio::test]
async fn test_retry_budget_exhausted_is_failure() {
    // Two dropped connections against a budget of one retry.
    let upstream = spawn_flaky_upstream(2).await;
    let gateway = spawn_gateway(test_config(upstream)).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{gateway}/api/chat"))
        .json(&json!({ "prompt": "hello" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}
