use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub mod loader;

pub use loader::ConfigLoader;

pub const DEFAULT_BASE_URL: &str = "https://api.lxndr.dev";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Location of the user-level configuration file, if the platform has one
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "lxndr", "energizame")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source shaped like the environment
    pub fn merge_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("ENERGIZAME_BASE_URL") {
            self.api.base_url = base_url;
        }

        if let Some(timeout) = lookup("ENERGIZAME_TIMEOUT_SECS") {
            self.api.timeout_secs = timeout.parse::<u64>().map_err(|_| {
                Error::Config(format!(
                    "ENERGIZAME_TIMEOUT_SECS must be a number of seconds, got '{timeout}'"
                ))
            })?;
        }

        if let Some(log_level) = lookup("ENERGIZAME_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }

        Ok(())
    }

    /// Parsed service root; only http and https are accepted
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::Config(format!(
                "base_url must use http or https, got '{other}'"
            ))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        if self.api.timeout_secs == 0 {
            return Err(Error::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
