//! Endpoint handlers and payload shapes.
//!
//! The chat body is parsed by hand rather than through the `Json` extractor
//! so that malformed JSON answers 400 with the gateway's own envelope
//! instead of the framework's rejection.

use axum::{
    Json,
    extract::{Request, State},
    http::{Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::AppState;

/// Inbound chat request from the editor.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    #[serde(default)]
    pub model: Option<String>,
}

/// Pacing middleware: every request waits out the shared interval before
/// any routing happens.
pub async fn throttle(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.limiter.acquire().await;
    next.run(request).await
}

/// POST /api/chat — relay a prompt to the upstream generate endpoint.
pub async fn chat(State(state): State<AppState>, body: String) -> Response {
    let request: ChatRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            let body = json!({
                "success": false,
                "error": format!("Invalid request body: {err}"),
            });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let model = request
        .model
        .unwrap_or_else(|| state.config.default_model.clone());
    tracing::info!("Relaying chat request (model: {model})");

    let payload = json!({
        "model": model,
        "prompt": request.prompt,
        "stream": false,
    });
    let result = state.upstream.post("/api/generate", payload).await;

    if result.success {
        if let Some(data) = &result.data {
            let response = json!({
                "success": true,
                "response": data
                    .get("response")
                    .and_then(Value::as_str)
                    .or_else(|| data.get("text").and_then(Value::as_str))
                    .unwrap_or_default(),
                "model": data.get("model").and_then(Value::as_str).unwrap_or(&model),
                "done": data.get("done").and_then(Value::as_bool).unwrap_or(true),
                "context": data.get("context"),
                "total_duration": data.get("total_duration"),
                "load_duration": data.get("load_duration"),
                "prompt_eval_count": data.get("prompt_eval_count"),
                "eval_count": data.get("eval_count"),
            });
            return (StatusCode::OK, Json(response)).into_response();
        }
    }

    tracing::error!("Chat request failed: {:?}", result.error);
    let body = json!({
        "success": false,
        "error": result.error.clone().unwrap_or_else(|| "Unknown error occurred".to_string()),
        "details": {
            "statusCode": result.status,
            "error": result.error,
        },
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// GET /api/models — relay the upstream model list.
pub async fn models(State(state): State<AppState>) -> Response {
    tracing::info!("Fetching models list");
    let result = state.upstream.get("/api/tags").await;

    let listed = result.data.as_ref().and_then(|data| data.get("models"));
    if result.success {
        if let Some(models) = listed {
            let body = json!({ "success": true, "models": models });
            return (StatusCode::OK, Json(body)).into_response();
        }
    }

    let body = json!({
        "success": false,
        "error": result.error.unwrap_or_else(|| "Failed to fetch models".to_string()),
        "models": [],
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// GET /api/test — upstream liveness probe.
///
/// Always answers 200; upstream failure is reported only in the body.
/// Existing consumers depend on that contract, so it is preserved rather
/// than mapped to a 5xx.
pub async fn test_connection(State(state): State<AppState>) -> Response {
    tracing::info!("Testing upstream connection");
    let result = state.upstream.get("/api/tags").await;

    let count = result
        .data
        .as_ref()
        .and_then(|data| data.get("models"))
        .and_then(Value::as_array)
        .map(|models| models.len())
        .unwrap_or(0);

    let body = json!({
        "success": result.success,
        "message": if result.success { "Ollama connection successful" } else { "Connection failed" },
        "models": count,
        "endpoint": state.upstream.endpoint(),
        "error": result.error,
    });
    (StatusCode::OK, Json(body)).into_response()
}

/// 404 handler. Unmatched paths under /api/ get a distinct body from paths
/// outside it, matching what editor builds expect. Bare OPTIONS requests
/// answer 200 with no body; preflights never reach here (the CORS layer
/// handles them).
pub async fn fallback(method: Method, uri: Uri) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    let body = if uri.path().starts_with("/api/") {
        json!({ "error": "Endpoint not found" })
    } else {
        json!({ "error": "Not found" })
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}
