//! End-to-end submission scenarios: controller, HTTP transport and fake service

mod common;

use common::{unreachable_base_url, FakeReply, FakeService};
use energizame::api::HttpSubscriptionApi;
use energizame::notify::{NoticeKind, RecordingNotifier};
use energizame::{SubmissionController, SubmissionMode, SubmissionOutcome, SubscriptionForm};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

fn controller(base_url: &str) -> (SubmissionController, RecordingNotifier) {
    let api =
        HttpSubscriptionApi::new(Url::parse(base_url).unwrap(), Duration::from_secs(5)).unwrap();
    let notifier = RecordingNotifier::new();
    (
        SubmissionController::new(Arc::new(api), Arc::new(notifier.clone())),
        notifier,
    )
}

#[tokio::test]
async fn test_create_with_message_reply_succeeds() {
    let service = FakeService::start(FakeReply::ok(json!({ "message": "ok" }))).await;
    let (controller, notifier) = controller(&service.base_url);

    let form = SubscriptionForm::new("1234567890", "0987654321").with_lead_time("15 minutos");
    let outcome = controller.submit(form, SubmissionMode::Create).await;

    assert_eq!(
        outcome,
        SubmissionOutcome::Succeeded {
            mode: SubmissionMode::Create
        }
    );
    assert!(!controller.is_busy());
    assert_eq!(service.received().len(), 1);
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
    assert_eq!(notices[0].description, "notifications configured successfully");
}

#[tokio::test]
async fn test_short_national_id_never_reaches_service() {
    let service = FakeService::start(FakeReply::ok(json!({ "message": "ok" }))).await;
    let (controller, _) = controller(&service.base_url);

    for mode in [SubmissionMode::Create, SubmissionMode::Delete] {
        let outcome = controller
            .submit(SubscriptionForm::new("123", "0987654321"), mode)
            .await;
        assert_eq!(
            outcome,
            SubmissionOutcome::ValidationFailed {
                message: "national ID must be 10 digits.".to_string()
            }
        );
        assert!(!controller.is_busy());
    }

    assert!(service.received().is_empty());
}

#[tokio::test]
async fn test_delete_with_error_reply_is_not_found() {
    let service = FakeService::start(FakeReply::ok(json!({ "error": "not found" }))).await;
    let (controller, notifier) = controller(&service.base_url);

    let outcome = controller
        .submit(
            SubscriptionForm::new("1234567890", "0987654321"),
            SubmissionMode::Delete,
        )
        .await;

    assert_eq!(outcome, SubmissionOutcome::NotFound);
    assert!(!controller.is_busy());
    assert_eq!(notifier.notices()[0].title, "not found");
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let (controller, notifier) = controller(&unreachable_base_url());

    let form = SubscriptionForm::new("1234567890", "0987654321").with_lead_time("60 minutos");
    let outcome = controller.submit(form, SubmissionMode::Create).await;

    assert_eq!(outcome, SubmissionOutcome::TransportFailed);
    assert!(!controller.is_busy());
    assert_eq!(notifier.notices()[0].kind, NoticeKind::Error);
}

#[tokio::test]
async fn test_reply_without_indicator_is_transport_failure() {
    let service = FakeService::start(FakeReply::ok(json!({ "status": "queued" }))).await;
    let (controller, _) = controller(&service.base_url);

    let outcome = controller
        .submit(
            SubscriptionForm::new("1234567890", "0987654321"),
            SubmissionMode::Delete,
        )
        .await;

    assert_eq!(outcome, SubmissionOutcome::TransportFailed);
    assert_eq!(controller.last_outcome(), Some(SubmissionOutcome::TransportFailed));
}

#[tokio::test]
async fn test_controller_is_reusable_after_each_outcome() {
    let service = FakeService::start(FakeReply::ok(json!({ "error": "not found" }))).await;
    let (controller, notifier) = controller(&service.base_url);
    let form = SubscriptionForm::new("1234567890", "0987654321").with_lead_time("5 minutos");

    let first = controller.submit(form.clone(), SubmissionMode::Delete).await;
    service.set_reply(FakeReply::ok(json!({ "message": "ok" })));
    let second = controller.submit(form, SubmissionMode::Create).await;

    assert_eq!(first, SubmissionOutcome::NotFound);
    assert!(second.is_success());
    assert_eq!(service.received().len(), 2);
    assert_eq!(notifier.notices().len(), 2);
}
