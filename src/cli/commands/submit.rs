//! `energizame add` / `energizame remove`

use crate::api::HttpSubscriptionApi;
use crate::config::Config;
use crate::controller::SubmissionController;
use crate::notify::ConsoleNotifier;
use crate::subscription::{SubmissionMode, SubscriptionForm};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Submit one form against the configured service and print the outcome
pub async fn run_submission(
    config: &Config,
    form: SubscriptionForm,
    mode: SubmissionMode,
) -> Result<bool> {
    let api = HttpSubscriptionApi::new(config.base_url()?, config.timeout())
        .context("Failed to set up the subscription service client")?;
    let controller = SubmissionController::new(Arc::new(api), Arc::new(ConsoleNotifier));

    let outcome = controller.submit(form, mode).await;
    Ok(outcome.is_success())
}
