//! HTTP client for the subscription endpoints

use super::{ApiError, SubscriptionApi};
use crate::error::{Error, Result};
use crate::subscription::{SubmissionMode, SubscriptionRequest};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub struct HttpSubscriptionApi {
    client: Client,
    base_url: Url,
}

impl HttpSubscriptionApi {
    /// Create a client rooted at `base_url`.
    ///
    /// `timeout` bounds a whole round trip; it is the only thing that frees a
    /// hung request.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Absolute URL of the endpoint serving `mode`
    pub fn endpoint(&self, mode: SubmissionMode) -> Result<Url> {
        let mut base = self.base_url.clone();
        // Url::join drops the last path segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(mode.endpoint_path())?)
    }
}

#[async_trait]
impl SubscriptionApi for HttpSubscriptionApi {
    #[tracing::instrument(name = "Calling subscription service", skip(self, request))]
    async fn send(
        &self,
        mode: SubmissionMode,
        request: &SubscriptionRequest,
    ) -> std::result::Result<Value, ApiError> {
        let url = self
            .endpoint(mode)
            .map_err(|e| ApiError::Endpoint(e.to_string()))?;
        tracing::debug!("{} {}", mode.method(), url);

        let response = self
            .client
            .request(mode.method(), url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ApiError::Connection(e.to_string())
                } else {
                    ApiError::Request(e)
                }
            })?;

        tracing::debug!("Subscription service answered with status {}", response.status());

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
