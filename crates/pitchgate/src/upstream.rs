//! Upstream HTTP client for the Ollama-compatible API.

use std::time::Duration;

use serde_json::Value;

use crate::config::Config;

/// Outcome of one relayed call.
///
/// Every failure mode folds into this shape; the handlers decide the HTTP
/// status to answer with. `request` never returns `Err`.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub success: bool,
    pub status: Option<u16>,
    pub data: Option<Value>,
    pub error: Option<String>,
}

impl UpstreamResponse {
    fn failure(error: String) -> Self {
        Self {
            success: false,
            status: None,
            data: None,
            error: Some(error),
        }
    }
}

pub struct Upstream {
    http: reqwest::Client,
    base_url: String,
    retry_delay: Duration,
    retry_budget: u32,
}

impl Upstream {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .pool_max_idle_per_host(2)
            .user_agent("PitchPerfect/1.0")
            .build()?;

        Ok(Self {
            http,
            base_url: config.upstream_url.trim_end_matches('/').to_string(),
            retry_delay: config.retry_delay,
            retry_budget: config.retry_budget,
        })
    }

    /// Base URL of the upstream API, for status reporting.
    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> UpstreamResponse {
        self.request(path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> UpstreamResponse {
        self.request(path, Some(body)).await
    }

    async fn request(&self, path: &str, body: Option<Value>) -> UpstreamResponse {
        let url = format!("{}{}", self.base_url, path);
        let mut retries_left = self.retry_budget;

        loop {
            let request = match &body {
                Some(json) => self.http.post(&url).json(json),
                None => self.http.get(&url),
            };

            match request.send().await {
                Ok(response) => return read_response(response).await,
                Err(err) if retries_left > 0 && is_transient(&err) => {
                    retries_left -= 1;
                    tracing::warn!("Transient upstream error, retrying in {:?}: {err}", self.retry_delay);
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(err) => {
                    tracing::error!("Upstream request failed: {err}");
                    return UpstreamResponse::failure(err.to_string());
                }
            }
        }
    }
}

async fn read_response(response: reqwest::Response) -> UpstreamResponse {
    let status = response.status().as_u16();
    let text = match response.text().await {
        Ok(text) => text,
        Err(err) => return UpstreamResponse::failure(err.to_string()),
    };

    if !(200..300).contains(&status) {
        return UpstreamResponse {
            success: false,
            status: Some(status),
            data: None,
            error: Some(format!("HTTP {status}: {text}")),
        };
    }

    if text.is_empty() {
        return UpstreamResponse {
            success: true,
            status: Some(status),
            data: Some(Value::Object(Default::default())),
            error: None,
        };
    }

    match serde_json::from_str(&text) {
        Ok(data) => UpstreamResponse {
            success: true,
            status: Some(status),
            data: Some(data),
            error: None,
        },
        Err(err) => UpstreamResponse::failure(format!("Invalid JSON response: {err}")),
    }
}

/// Timeouts, connection resets and abruptly closed sockets get the retry;
/// anything else (including connection refused) fails immediately.
fn is_transient(err: &reqwest::Error) -> bool {
    if err.is_timeout() {
        return true;
    }
    let chain = error_chain(err).to_lowercase();
    chain.contains("connection reset")
        || chain.contains("connection closed")
        || chain.contains("incompletemessage")
}

fn error_chain(err: &reqwest::Error) -> String {
    let mut out = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}
