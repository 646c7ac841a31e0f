use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, CoreError};
use crate::types::SortMode;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub reddit: RedditCredentials,
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Script-app credentials. Reddit script apps authenticate with the app's
/// id/secret pair plus the owning account's username and password, and
/// require a descriptive user agent on every request.
#[derive(Debug, Clone, Deserialize)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub sort: SortMode,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sort: SortMode::New,
            input: PathBuf::from("input.csv"),
            output: PathBuf::from("output.csv"),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("reddit.client_id", &self.reddit.client_id),
            ("reddit.client_secret", &self.reddit.client_secret),
            ("reddit.user_agent", &self.reddit.user_agent),
            ("reddit.username", &self.reddit.username),
            ("reddit.password", &self.reddit.password),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}
