use super::{default_config_path, Config};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Builds a [`Config`] from defaults, a TOML file and the environment
///
/// An explicitly requested file must exist; the platform default file is
/// optional.
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    read_env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            explicit_path: None,
            read_env: true,
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Skip environment overrides
    pub fn without_env(mut self) -> Self {
        self.read_env = false;
        self
    }

    pub async fn load(&self) -> Result<Config> {
        let mut config = match &self.explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::read_file(path).await?
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::read_file(&path).await?,
                None => Config::new(),
            },
        };

        if self.read_env {
            config.merge_env_vars()?;
        }

        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<Config> {
        tracing::debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).await?;
        Ok(toml::from_str(&content)?)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
