//! Display collaborator for submission outcomes
//!
//! The controller hands every outcome to a [`Notifier`] exactly once. The
//! console implementation backs the CLI; [`RecordingNotifier`] captures
//! notices for assertions in tests.

use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A title/description pair ready to be shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, title: &str, description: &str);
}

/// Prints successes to stdout and errors to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, description: &str) {
        match kind {
            NoticeKind::Success => println!("✅ {title}: {description}"),
            NoticeKind::Error => eprintln!("❌ {title}: {description}"),
        }
    }
}

/// Keeps every notice it receives, in order
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, title: &str, description: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(Notice::new(kind, title, description));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let recorder = RecordingNotifier::new();
        let shared: Arc<dyn Notifier> = Arc::new(recorder.clone());

        shared.notify(NoticeKind::Error, "not found", "nothing here");
        shared.notify(NoticeKind::Success, "notification added", "done");

        let notices = recorder.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0], Notice::new(NoticeKind::Error, "not found", "nothing here"));
        assert_eq!(notices[1].kind, NoticeKind::Success);
    }
}
