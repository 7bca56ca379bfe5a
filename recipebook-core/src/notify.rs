//! User-facing notifications for store outcomes.

use std::sync::Mutex;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Fire-and-forget notification sink.
///
/// Plays the toast role of the original UI: the store pushes write failures
/// here, callers push mutation confirmations. The store depends on a
/// notifier being present but does not manage its lifecycle.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Notifier that forwards messages to the log, for headless callers.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => tracing::info!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }
}

/// Notifier that records every message, for asserting on the notification
/// side channel in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, in order.
    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_messages_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first", Severity::Success);
        notifier.notify("second", Severity::Error);

        let messages = notifier.messages();
        assert_eq!(
            messages,
            vec![
                ("first".to_string(), Severity::Success),
                ("second".to_string(), Severity::Error),
            ]
        );
    }
}
