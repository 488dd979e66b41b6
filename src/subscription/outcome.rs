//! Classification of submission results
//!
//! Every attempt ends in exactly one [`SubmissionOutcome`]. The mapping from a
//! remote reply to an outcome lives in [`classify`], kept pure so it can be
//! tested without a network.

use super::SubmissionMode;
use crate::api::ApiError;
use crate::notify::{Notice, NoticeKind};
use serde_json::Value;

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Rejected locally; no request was sent
    ValidationFailed { message: String },
    /// The service has no matching subscription
    NotFound,
    Succeeded { mode: SubmissionMode },
    /// Network failure or a reply that could not be understood
    TransportFailed,
    /// Another submission on the same controller has not settled yet
    AlreadyInProgress,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// What the user is shown for this outcome
    pub fn notice(&self) -> Notice {
        match self {
            Self::ValidationFailed { message } => {
                Notice::new(NoticeKind::Error, "validation error", message.clone())
            }
            Self::NotFound => Notice::new(
                NoticeKind::Error,
                "not found",
                "no notifications registered for this ID",
            ),
            Self::Succeeded {
                mode: SubmissionMode::Create,
            } => Notice::new(
                NoticeKind::Success,
                "notification added",
                "notifications configured successfully",
            ),
            Self::Succeeded {
                mode: SubmissionMode::Delete,
            } => Notice::new(
                NoticeKind::Success,
                "notification removed",
                "all notifications for this ID have been removed",
            ),
            Self::TransportFailed => Notice::new(
                NoticeKind::Error,
                "error",
                "an error occurred while processing the request. Please try again.",
            ),
            Self::AlreadyInProgress => Notice::new(
                NoticeKind::Error,
                "busy",
                "a request is already being processed",
            ),
        }
    }
}

/// Map the remote reply for a `mode` submission onto an outcome.
///
/// Only the decoded body is consulted. An `error` indicator wins over a
/// `message` indicator; a body carrying neither counts as a transport failure.
pub fn classify(mode: SubmissionMode, reply: Result<Value, ApiError>) -> SubmissionOutcome {
    let body = match reply {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Subscription request failed: {}", e);
            return SubmissionOutcome::TransportFailed;
        }
    };

    if indicator_set(&body, "error") {
        tracing::debug!("Remote reported no matching subscription");
        SubmissionOutcome::NotFound
    } else if indicator_set(&body, "message") {
        SubmissionOutcome::Succeeded { mode }
    } else {
        tracing::warn!("Unrecognised reply from subscription service: {}", body);
        SubmissionOutcome::TransportFailed
    }
}

/// A field counts as set unless it is missing, null, false, zero or an empty string
fn indicator_set(body: &Value, key: &str) -> bool {
    match body.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
