//! The gateway facade: everything the editor sends over the wire goes
//! through here, and every failure mode folds into a reply struct the UI
//! can show. Nothing in this module panics on network trouble.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::config::Config;

/// Cached model list, served instead of a live fetch by default. The live
/// endpoint works, but hammering it trips upstream rate limiting, so the
/// picker runs from this list unless `gateway.live_models` opts in.
pub const FALLBACK_MODELS: [&str; 8] = [
    "llama3.2:latest",
    "llama3.1:8b",
    "mistral:latest",
    "gemma2:9b",
    "qwen2.5:7b",
    "phi3:mini",
    "codellama:7b",
    "tinyllama:latest",
];

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    /// Startup probe reached the gateway.
    Connected,
    /// Probe failed; real calls are still attempted first, with a canned
    /// failure reply if they don't succeed.
    Offline,
    /// No gateway configured; calls short-circuit to instructions.
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub model: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatReply {
    fn failure(error: String) -> Self {
        Self {
            success: false,
            response: String::new(),
            model: String::new(),
            error: Some(error),
        }
    }

    fn backend_required() -> Self {
        Self::failure(
            "AI backend required. Start the gateway with `pitchgate` and enable it \
             with `pitchdeck config set gateway.enabled true`."
                .to_string(),
        )
    }

    fn offline() -> Self {
        Self::failure(
            "Offline mode: the gateway is not reachable. Start it with `pitchgate` \
             and try again."
                .to_string(),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub models: u64,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelsReply {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
}

#[derive(Clone)]
pub struct Gateway {
    base_url: String,
    agent: ureq::Agent,
    mode: BackendMode,
    live_models: bool,
}

impl Gateway {
    /// Build the facade and run the startup liveness probe.
    pub fn connect(config: &Config) -> Self {
        let base_url = config.gateway_url();
        let agent = agent_with_timeout(Duration::from_secs(65));

        let mode = if !config.gateway_enabled() {
            BackendMode::Disabled
        } else if probe(&base_url) {
            BackendMode::Connected
        } else {
            BackendMode::Offline
        };

        Self {
            base_url,
            agent,
            mode,
            live_models: config.live_models(),
        }
    }

    pub fn mode(&self) -> BackendMode {
        self.mode
    }

    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    /// Send a prompt through the gateway. Never errors; the reply carries
    /// the failure.
    pub fn chat(&self, prompt: &str, model: &str) -> ChatReply {
        if self.mode == BackendMode::Disabled {
            return ChatReply::backend_required();
        }
        match self.try_chat(prompt, model) {
            Ok(reply) => reply,
            Err(_) if self.mode == BackendMode::Offline => ChatReply::offline(),
            Err(err) => ChatReply::failure(err.to_string()),
        }
    }

    fn try_chat(&self, prompt: &str, model: &str) -> Result<ChatReply, ureq::Error> {
        let url = format!("{}/api/chat", self.base_url);
        let reply: ChatReply = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send_json(&json!({ "prompt": prompt, "model": model }))?
            .body_mut()
            .read_json()?;
        Ok(reply)
    }

    /// The model list for the picker. Serves the cached list unless live
    /// fetching was opted into, and falls back to it on any failure.
    pub fn list_models(&self) -> Vec<String> {
        if !self.live_models || self.mode == BackendMode::Disabled {
            return cached_models();
        }
        match self.try_list_models() {
            Ok(models) if !models.is_empty() => models,
            _ => cached_models(),
        }
    }

    fn try_list_models(&self) -> Result<Vec<String>, ureq::Error> {
        let url = format!("{}/api/models", self.base_url);
        let reply: ModelsReply = self.agent.get(&url).call()?.body_mut().read_json()?;
        if !reply.success {
            return Ok(Vec::new());
        }
        Ok(reply.models.into_iter().map(|m| m.name).collect())
    }

    /// Probe the gateway's test endpoint.
    pub fn test_connection(&self) -> TestReply {
        if self.mode == BackendMode::Disabled {
            return TestReply {
                success: false,
                message: "AI backend disabled".to_string(),
                models: 0,
                endpoint: Some(self.base_url.clone()),
                error: None,
            };
        }
        let url = format!("{}/api/test", self.base_url);
        match self.agent.get(&url).call() {
            Ok(mut response) => response.body_mut().read_json().unwrap_or_else(|err| TestReply {
                success: false,
                message: "Connection failed".to_string(),
                models: 0,
                endpoint: Some(self.base_url.clone()),
                error: Some(err.to_string()),
            }),
            Err(err) => TestReply {
                success: false,
                message: "Connection failed".to_string(),
                models: 0,
                endpoint: Some(self.base_url.clone()),
                error: Some(err.to_string()),
            },
        }
    }
}

fn cached_models() -> Vec<String> {
    FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
}

fn probe(base_url: &str) -> bool {
    let agent = agent_with_timeout(PROBE_TIMEOUT);
    agent
        .get(&format!("{base_url}/api/test"))
        .call()
        .is_ok()
}

fn agent_with_timeout(timeout: Duration) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .new_agent()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;

    fn disabled_config() -> Config {
        Config {
            gateway: Some(GatewayConfig {
                enabled: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_disabled_mode_short_circuits() {
        let gateway = Gateway::connect(&disabled_config());
        assert_eq!(gateway.mode(), BackendMode::Disabled);

        let reply = gateway.chat("hello", "m1");
        assert!(!reply.success);
        assert!(reply.error.unwrap().contains("backend required"));

        let test = gateway.test_connection();
        assert!(!test.success);
        assert_eq!(test.message, "AI backend disabled");
    }

    #[test]
    fn test_model_list_is_cached_by_default() {
        let gateway = Gateway::connect(&disabled_config());
        let models = gateway.list_models();
        assert_eq!(models.len(), 8);
        assert_eq!(models[0], "llama3.2:latest");
    }

    #[test]
    fn test_unreachable_gateway_goes_offline() {
        // Port 9 (discard) is never serving the gateway.
        let mut config = Config::default();
        config.set("gateway.url", "http://127.0.0.1:9").unwrap();
        let gateway = Gateway::connect(&config);
        assert_eq!(gateway.mode(), BackendMode::Offline);

        let reply = gateway.chat("hello", "m1");
        assert!(!reply.success);
        assert!(reply.error.unwrap().contains("Offline mode"));
    }
}
