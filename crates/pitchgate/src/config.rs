//! Gateway configuration.
//!
//! All knobs are environment-driven with compiled-in defaults. The original
//! deployment configured only `PORT`; the upstream host and model were
//! constants, now exposed as variables.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Gateway configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the gateway listens on
    pub bind_addr: SocketAddr,
    /// Base URL of the Ollama-compatible API
    pub upstream_url: String,
    /// Model used when a chat request names none
    pub default_model: String,
    /// Minimum interval between any two inbound requests
    pub min_interval: Duration,
    /// Per-attempt upstream request timeout
    pub request_timeout: Duration,
    /// Pause before the single transient-error retry
    pub retry_delay: Duration,
    /// How many retries a transient transport error gets
    pub retry_budget: u32,
    /// Log level when RUST_LOG is unset
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        // PITCHGATE_BIND wins; bare PORT is honored for compatibility with
        // the original deployment scripts.
        let bind_addr = env::var("PITCHGATE_BIND")
            .ok()
            .or_else(|| env::var("PORT").ok().map(|p| format!("127.0.0.1:{p}")))
            .unwrap_or_else(|| "127.0.0.1:8081".to_string())
            .parse()
            .expect("Invalid PITCHGATE_BIND format");

        let upstream_url = env::var("PITCHGATE_UPSTREAM_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:11434".to_string());

        let default_model = env::var("PITCHGATE_DEFAULT_MODEL")
            .unwrap_or_else(|_| "llama3.2:latest".to_string());

        let min_interval = duration_ms(env::var("PITCHGATE_MIN_INTERVAL_MS").ok(), 1000);
        let retry_delay = duration_ms(env::var("PITCHGATE_RETRY_DELAY_MS").ok(), 3000);

        let log_level = env::var("PITCHGATE_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            bind_addr,
            upstream_url,
            default_model,
            min_interval,
            request_timeout: Duration::from_secs(60),
            retry_delay,
            retry_budget: 1,
            log_level,
        }
    }
}

fn duration_ms(value: Option<String>, default_ms: u64) -> Duration {
    let ms = value
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default_ms);
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_ms_parses_and_defaults() {
        assert_eq!(duration_ms(Some("250".to_string()), 1000), Duration::from_millis(250));
        assert_eq!(duration_ms(Some("nope".to_string()), 1000), Duration::from_millis(1000));
        assert_eq!(duration_ms(None, 3000), Duration::from_millis(3000));
    }
}
