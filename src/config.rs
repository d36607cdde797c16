use serde::Deserialize;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::warn;

use crate::http::{CacheMode, Credentials, RequestMode};

static CONFIG: OnceLock<FetchConfig> = OnceLock::new();

/// Defaults used when building requests and responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub request: RequestDefaults,
    pub response: ResponseDefaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    pub method: String,
    pub mode: RequestMode,
    pub credentials: Credentials,
    pub cache: CacheMode,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            mode: RequestMode::Cors,
            credentials: Credentials::Omit,
            cache: CacheMode::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResponseDefaults {
    pub status: u16,
    pub status_text: String,
}

impl Default for ResponseDefaults {
    fn default() -> Self {
        Self {
            status: 200,
            status_text: String::new(),
        }
    }
}

impl FromStr for FetchConfig {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl FetchConfig {
    pub fn from_file(path: &str) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path, %err, "failed to read config, falling back to defaults");
                return FetchConfig::default();
            }
        };

        match content.parse::<FetchConfig>() {
            Ok(config) => config,
            Err(err) => {
                warn!(path, %err, "failed to deserialize config, falling back to defaults");
                FetchConfig::default()
            }
        }
    }
}

/// Installs the process-wide config. Returns `false` if one was already set.
pub fn set_config(cfg: FetchConfig) -> bool {
    CONFIG.set(cfg).is_ok()
}

/// Process-wide config, defaults when [`set_config`] was never called.
pub fn config() -> &'static FetchConfig {
    CONFIG.get_or_init(FetchConfig::default)
}
