//! Transport to the remote notification service
//!
//! [`SubscriptionApi`] is the seam between the submission pipeline and the
//! network. Production code talks HTTP through [`HttpSubscriptionApi`]; tests
//! swap in [`MockSubscriptionApi`] to script replies and observe calls.

pub mod error;
pub mod http;
pub mod mock;

pub use error::ApiError;
pub use http::HttpSubscriptionApi;
pub use mock::{MockReply, MockSubscriptionApi, RecordedCall};

use crate::subscription::{SubmissionMode, SubscriptionRequest};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait SubscriptionApi: Send + Sync {
    /// Send one request for `mode` and return the decoded JSON body.
    ///
    /// Implementations perform a single round trip and never retry. The
    /// HTTP status is not part of the contract; callers classify the body.
    async fn send(&self, mode: SubmissionMode, request: &SubscriptionRequest)
        -> Result<Value, ApiError>;
}
