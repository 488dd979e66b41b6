//! Command routing and execution

use crate::cli::args::{Cli, Commands};
use crate::cli::commands::{run_lead_times, run_submission};
use crate::config::{Config, ConfigLoader};
use crate::subscription::{SubmissionMode, SubscriptionForm};
use anyhow::{Context, Result};

/// Resolve configuration for this invocation; `--base-url` has the last word
pub async fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    let mut config = loader.load().await.context("Failed to load configuration")?;

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Execute a CLI command. Returns whether the command succeeded.
pub async fn execute_command(command: Commands, config: &Config) -> Result<bool> {
    match command {
        Commands::Add {
            cedula,
            telefono,
            tiempo,
        } => {
            let form = SubscriptionForm {
                cedula,
                telefono,
                tiempo_notificacion: tiempo.map(|t| t.wire_value()),
            };
            run_submission(config, form, SubmissionMode::Create).await
        }
        Commands::Remove { cedula, telefono } => {
            run_submission(
                config,
                SubscriptionForm::new(cedula, telefono),
                SubmissionMode::Delete,
            )
            .await
        }
        Commands::LeadTimes { json } => run_lead_times(json).map(|_| true),
    }
}
