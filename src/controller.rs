//! Submission state machine
//!
//! [`SubmissionController`] runs one add/remove attempt end to end: claim the
//! busy flag, validate, make at most one request, classify the reply, hand
//! the outcome to the notifier and release the flag.

use crate::api::SubscriptionApi;
use crate::notify::Notifier;
use crate::subscription::{
    classify, SubmissionMode, SubmissionOutcome, SubscriptionForm, SubscriptionRequest,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Clears the busy flag when dropped, including during a panic unwind
struct BusyGuard<'a> {
    busy: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn claim(busy: &'a AtomicBool) -> Option<Self> {
        busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { busy })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

pub struct SubmissionController {
    api: Arc<dyn SubscriptionApi>,
    notifier: Arc<dyn Notifier>,
    busy: AtomicBool,
    last_outcome: Mutex<Option<SubmissionOutcome>>,
}

impl SubmissionController {
    pub fn new(api: Arc<dyn SubscriptionApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            busy: AtomicBool::new(false),
            last_outcome: Mutex::new(None),
        }
    }

    /// True while a submission is in flight; triggers should be disabled meanwhile
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Outcome of the most recent settled attempt
    pub fn last_outcome(&self) -> Option<SubmissionOutcome> {
        self.last_outcome
            .lock()
            .ok()
            .and_then(|outcome| outcome.clone())
    }

    /// Run one submission and report its outcome.
    ///
    /// A call made while another is in flight returns
    /// [`SubmissionOutcome::AlreadyInProgress`] without touching the network.
    #[tracing::instrument(name = "Submitting subscription", skip(self, form))]
    pub async fn submit(&self, form: SubscriptionForm, mode: SubmissionMode) -> SubmissionOutcome {
        let Some(busy) = BusyGuard::claim(&self.busy) else {
            tracing::warn!("Rejected submission while another one is in flight");
            let outcome = SubmissionOutcome::AlreadyInProgress;
            self.report(&outcome);
            return outcome;
        };

        let outcome = self.attempt(form, mode).await;

        if let Ok(mut last) = self.last_outcome.lock() {
            *last = Some(outcome.clone());
        }
        self.report(&outcome);
        drop(busy);
        outcome
    }

    async fn attempt(&self, form: SubscriptionForm, mode: SubmissionMode) -> SubmissionOutcome {
        let request = match SubscriptionRequest::parse(form, mode) {
            Ok(request) => request,
            Err(e) => {
                tracing::info!("Submission failed validation: {}", e);
                return SubmissionOutcome::ValidationFailed {
                    message: e.to_string(),
                };
            }
        };

        let reply = self.api.send(mode, &request).await;
        let outcome = classify(mode, reply);
        tracing::info!(?outcome, "Submission settled");
        outcome
    }

    fn report(&self, outcome: &SubmissionOutcome) {
        let notice = outcome.notice();
        self.notifier
            .notify(notice.kind, &notice.title, &notice.description);
    }
}
