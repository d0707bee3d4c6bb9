//! Transient user notifications.
//!
//! The dashboard reports command outcomes through this seam; the surrounding
//! shell decides how a toast or banner actually looks.

use std::sync::Mutex;

/// Non-blocking notification channel shown to the user.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that writes through the tracing pipeline. Useful as a default
/// when no UI shell is wired up.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(kind = "success", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::warn!(kind = "error", "{}", message);
    }
}

/// Records every notification; used by tests to assert on user feedback.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NotificationKind, String)>>,
}

/// Severity of a recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(NotificationKind, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.of_kind(NotificationKind::Success)
    }

    pub fn errors(&self) -> Vec<String> {
        self.of_kind(NotificationKind::Error)
    }

    fn of_kind(&self, kind: NotificationKind) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((NotificationKind::Success, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((NotificationKind::Error, message.to_string()));
    }
}
