//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use crate::application::errors::ConfigError;

/// Client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub locale: LocaleConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SessionConfig {
    /// SQLite file holding the session values
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LocaleConfig {
    /// Build-time locale; `en-US` defers to the negotiated language
    pub lang: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:7001".to_string(),
                token: None,
                timeout_seconds: 30,
            },
            session: SessionConfig {
                path: PathBuf::from("broadcast-session.db"),
            },
            locale: LocaleConfig {
                lang: Some("en-US".to_string()),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField("api.base-url".to_string()));
        }
        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue("api.timeout-seconds must be positive".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Environment variables override whatever was loaded
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("BROADCAST_API_URL") {
            self.api.base_url = url;
        }

        if let Ok(token) = std::env::var("BROADCAST_TOKEN") {
            self.api.token = Some(token);
        }

        if let Ok(path) = std::env::var("BROADCAST_SESSION") {
            self.session.path = PathBuf::from(path);
        }

        if let Ok(lang) = std::env::var("BROADCAST_LANG") {
            self.locale.lang = Some(lang);
        }
    }
}
