//! Pitch Perfect model gateway.
//!
//! A single-process relay between the slide editor and a locally hosted
//! Ollama-compatible API. Applies permissive CORS, a process-wide request
//! pacing interval, a 60 second upstream timeout, and one retry for
//! transient transport errors. Every handler resolves to a structured
//! `{success, ...}` body; nothing propagates past the HTTP layer.

mod api;
mod config;
mod limiter;
mod upstream;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use limiter::RateLimiter;
use upstream::Upstream;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<Upstream>,
    pub limiter: Arc<RateLimiter>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pitch Perfect gateway");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Upstream endpoint: {}", config.upstream_url);
    tracing::info!("Default model: {}", config.default_model);

    let state = AppState {
        upstream: Arc::new(Upstream::new(&config)?),
        limiter: Arc::new(RateLimiter::new(config.min_interval)),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Gateway listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the gateway router.
///
/// Both `/api/*` and `/api/ollama/*` spellings are routed, matching what
/// existing editor builds send. The throttle layer sits outside CORS so
/// preflight requests pace through the limiter like everything else.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(api::chat))
        .route("/api/ollama/chat", post(api::chat))
        .route("/api/models", get(api::models))
        .route("/api/ollama/models", get(api::models))
        .route("/api/test", get(api::test_connection))
        .route("/api/ollama/test", get(api::test_connection))
        .fallback(api::fallback)
        .layer(cors)
        .layer(middleware::from_fn_with_state(state.clone(), api::throttle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests;
