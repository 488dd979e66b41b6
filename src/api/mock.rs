use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use super::{ApiError, SubscriptionApi};
use crate::subscription::{SubmissionMode, SubscriptionRequest};

/// Scripted behaviour for the next call
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Reply with this decoded body
    Body(Value),
    /// Fail as if nothing was listening
    ConnectionRefused,
    /// Fail as if the body was not JSON
    Garbled(String),
    /// Panic inside the transport
    Panic(String),
}

/// One request as the mock saw it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub mode: SubmissionMode,
    pub body: Value,
}

#[derive(Clone, Default)]
pub struct MockSubscriptionApi {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    call_history: Arc<Mutex<Vec<RecordedCall>>>,
    gate: Option<Arc<Notify>>,
}

impl MockSubscriptionApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply body
    pub fn reply_with(self, body: Value) -> Self {
        self.push_reply(MockReply::Body(body));
        self
    }

    /// Queue a scripted failure or panic
    pub fn fail_with(self, reply: MockReply) -> Self {
        self.push_reply(reply);
        self
    }

    pub fn push_reply(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Block every call after it is recorded until `gate` is notified
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.call_history.lock().unwrap().clone()
    }

    pub fn verify_called(&self, times: usize) -> bool {
        self.call_history.lock().unwrap().len() == times
    }
}

#[async_trait]
impl SubscriptionApi for MockSubscriptionApi {
    async fn send(
        &self,
        mode: SubmissionMode,
        request: &SubscriptionRequest,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_value(request).unwrap_or(Value::Null);
        self.call_history
            .lock()
            .unwrap()
            .push(RecordedCall { mode, body });

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Body(body)) => Ok(body),
            Some(MockReply::ConnectionRefused) => {
                Err(ApiError::Connection("connection refused".to_string()))
            }
            Some(MockReply::Garbled(text)) => Err(ApiError::Decode(format!(
                "expected JSON, got {text:?}"
            ))),
            Some(MockReply::Panic(message)) => panic!("{message}"),
            None => Err(ApiError::MockExpectationNotMet(format!(
                "No reply scripted for {mode} request"
            ))),
        }
    }
}
