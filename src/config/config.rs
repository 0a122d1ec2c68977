use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{API_URL_ENV, CONFIG_FILE, DEFAULT_API_BASE_URL};
use crate::error::{ErrorContext, OctofitResult};
use crate::octofit_error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: Option<String>,
    /// Unset means requests may hang indefinitely.
    pub request_timeout_secs: Option<u64>,
    pub default_format: Option<String>,
}

impl Config {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

pub fn config_path() -> OctofitResult<PathBuf> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| octofit_error!(ConfigError, "Could not find home directory"))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(_) => Config::default(),
    }
}

/// Missing or unreadable files yield the default configuration.
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    match fs::read_to_string(path) {
        Ok(config_str) => serde_json::from_str(&config_str).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
            Config::default()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read config file");
            Config::default()
        }
    }
}

pub fn save_config(config: &Config) -> OctofitResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> OctofitResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Flag, then `OCTOFIT_API_URL`, then the config file, then the default.
pub fn resolve_base_url(flag: Option<&str>, config: &Config) -> String {
    resolve_base_url_with(flag, env::var(API_URL_ENV).ok(), config)
}

pub fn resolve_base_url_with(flag: Option<&str>, env_value: Option<String>, config: &Config) -> String {
    let chosen = flag
        .map(str::to_string)
        .or(env_value)
        .or_else(|| config.api_base_url.clone())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    chosen.trim().trim_end_matches('/').to_string()
}
