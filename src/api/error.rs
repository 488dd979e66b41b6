#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Could not connect to subscription service: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    Endpoint(String),

    #[error("Failed to decode response body: {0}")]
    Decode(String),

    #[error("Mock expectation not met: {0}")]
    MockExpectationNotMet(String),
}
