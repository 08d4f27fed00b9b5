use super::schema::LanternConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides `classifier.api_key` from the file.
pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("No API key configured. Set DEEPSEEK_API_KEY or classifier.api_key")]
    MissingApiKey,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./lantern.yaml
    /// 2. ~/.lantern/config.yaml
    /// 3. Default configuration
    pub async fn load_default() -> Result<LanternConfig, ConfigError> {
        // Check current directory
        let local_config = PathBuf::from("./lantern.yaml");
        if local_config.exists() {
            return Self::load_from(&local_config).await;
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".lantern").join("config.yaml");
            if home_config.exists() {
                return Self::load_from(&home_config).await;
            }
        }

        // Return default
        Ok(LanternConfig::default())
    }

    pub async fn load_from(path: &Path) -> Result<LanternConfig, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: LanternConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve credentials once at startup. The environment wins over the
    /// file; an empty result is a hard error rather than a per-request
    /// lookup failure later.
    pub fn resolve_api_key(config: &mut LanternConfig) -> Result<(), ConfigError> {
        let env_key = std::env::var(API_KEY_ENV).ok();
        apply_api_key(config, env_key.as_deref())
    }
}

pub(crate) fn apply_api_key(
    config: &mut LanternConfig,
    env_key: Option<&str>,
) -> Result<(), ConfigError> {
    if let Some(key) = env_key {
        let key = key.trim();
        if !key.is_empty() {
            config.classifier.api_key = key.to_string();
        }
    }

    if config.classifier.api_key.is_empty() {
        return Err(ConfigError::MissingApiKey);
    }
    Ok(())
}
