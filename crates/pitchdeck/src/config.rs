use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "pitchdeck";

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8081";
pub const DEFAULT_MODEL: &str = "llama3.2:latest";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<GatewayConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Off by default: the model picker uses the cached list unless this
    /// opts into live fetching from the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_models: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `pitchdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# Pitch Perfect configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn gateway_url(&self) -> String {
        self.gateway
            .as_ref()
            .and_then(|g| g.url.clone())
            .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string())
    }

    pub fn gateway_enabled(&self) -> bool {
        self.gateway
            .as_ref()
            .and_then(|g| g.enabled)
            .unwrap_or(true)
    }

    pub fn default_model(&self) -> String {
        self.gateway
            .as_ref()
            .and_then(|g| g.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn live_models(&self) -> bool {
        self.gateway
            .as_ref()
            .and_then(|g| g.live_models)
            .unwrap_or(false)
    }

    pub fn default_theme(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.theme.as_deref())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "gateway.url" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    anyhow::bail!("Invalid gateway URL: {value}. Must start with http:// or https://.");
                }
                self.gateway.get_or_insert_with(GatewayConfig::default).url =
                    Some(value.trim_end_matches('/').to_string());
            }
            "gateway.model" => {
                self.gateway.get_or_insert_with(GatewayConfig::default).model =
                    Some(value.to_string());
            }
            "gateway.live_models" => {
                let flag = parse_bool(value)?;
                self.gateway
                    .get_or_insert_with(GatewayConfig::default)
                    .live_models = Some(flag);
            }
            "gateway.enabled" => {
                let flag = parse_bool(value)?;
                self.gateway
                    .get_or_insert_with(GatewayConfig::default)
                    .enabled = Some(flag);
            }
            "defaults.theme" => {
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: gateway.url, gateway.model, gateway.live_models, gateway.enabled, defaults.theme"
            ),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("Invalid boolean: {value}. Must be 'true' or 'false'."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unconfigured() {
        let config = Config::default();
        assert_eq!(config.gateway_url(), DEFAULT_GATEWAY_URL);
        assert_eq!(config.default_model(), DEFAULT_MODEL);
        assert!(config.gateway_enabled());
        assert!(!config.live_models());
        assert!(config.default_theme().is_none());
    }

    #[test]
    fn test_set_validates_keys_and_values() {
        let mut config = Config::default();
        config.set("gateway.url", "http://10.0.0.5:9090/").unwrap();
        assert_eq!(config.gateway_url(), "http://10.0.0.5:9090");

        config.set("gateway.live_models", "true").unwrap();
        assert!(config.live_models());

        assert!(config.set("gateway.url", "not-a-url").is_err());
        assert!(config.set("gateway.live_models", "maybe").is_err());
        assert!(config.set("nope.nope", "x").is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.set("gateway.model", "mistral:latest").unwrap();
        config.set("defaults.theme", "tidepool").unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.default_model(), "mistral:latest");
        assert_eq!(back.default_theme(), Some("tidepool"));
    }
}
