use serde::Deserialize;
use std::fs;
use std::time::Duration;

const API_URL_ENV: &str = "GROUPBUY_API_URL";
const API_TOKEN_ENV: &str = "GROUPBUY_API_TOKEN";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub general: General,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL, e.g. "https://api.example.com/api"
    pub base_url: String,
    /// Bearer token sent on every request
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct General {
    pub log_level: String,
    /// Countdown refresh interval
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Viewer identity used for the access check.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub participant: bool,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_tick_ms() -> u64 {
    1000
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl General {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_overrides(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(API_TOKEN_ENV).ok(),
        );
        Ok(config)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Override backend URL and token (from the environment in `load`).
    pub fn apply_overrides(&mut self, url: Option<String>, token: Option<String>) {
        if let Some(url) = url {
            self.api.base_url = url;
        }
        if let Some(token) = token {
            self.api.token = Some(token);
        }
    }
}
