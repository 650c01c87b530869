//! Toast notification model.
//!
//! A single slot holds the newest notification. Showing a new one replaces the
//! old one, and timers that fire for a replaced notification do nothing.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Time a toast stays on screen unless closed first
pub const AUTO_DISMISS_MS: u32 = 5000;

/// Severity of a toast. Unrecognized names map to `Info`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[display("success")]
    Success,
    #[display("error")]
    Error,
    #[display("warning")]
    Warning,
    #[default]
    #[serde(other)]
    #[display("info")]
    Info,
}

impl Severity {
    /// Background color of the banner
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "#28a745",
            Severity::Error => "#dc3545",
            Severity::Warning => "#ffc107",
            Severity::Info => "#17a2b8",
        }
    }

    /// Icon name for the banner
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "exclamation-circle",
            Severity::Warning => "exclamation-triangle",
            Severity::Info => "info-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

/// Notification with the id used to match its dismiss timer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Holds at most one visible notification
#[derive(Clone, Debug, Default)]
pub struct NotificationSlot {
    current: Option<NotificationItem>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing and return the new notification's id
    pub fn show(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(NotificationItem { id, notification });
        id
    }

    /// Remove the notification with `id` if it is still the one showing
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|item| item.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&NotificationItem> {
        self.current.as_ref()
    }

    pub fn len(&self) -> usize {
        usize::from(self.current.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_severity_defaults_to_info() {
        let parse = |name: &str| serde_json::from_value::<Severity>(serde_json::json!(name)).unwrap();
        assert_eq!(parse("error"), Severity::Error);
        assert_eq!(parse("fatal"), Severity::Info);
        assert_eq!(parse(""), Severity::Info);
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Success.color(), "#28a745");
        assert_eq!(Severity::Error.color(), "#dc3545");
        assert_eq!(Severity::Warning.color(), "#ffc107");
        assert_eq!(Severity::Info.color(), "#17a2b8");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_new_notification_replaces_previous() {
        let mut slot = NotificationSlot::new();
        slot.show(Notification::info("first"));
        let second = slot.show(Notification::error("second"));

        assert_eq!(slot.len(), 1);
        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.notification.message, "second");
    }

    #[test]
    fn test_stale_timer_is_noop() {
        let mut slot = NotificationSlot::new();
        let first = slot.show(Notification::info("first"));
        let second = slot.show(Notification::success("second"));

        // First notification's timer fires after it was replaced
        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().map(|item| item.id), Some(second));

        assert!(slot.dismiss(second));
        assert!(slot.is_empty());
    }

    #[test]
    fn test_timer_after_manual_close_is_noop() {
        let mut slot = NotificationSlot::new();
        let id = slot.show(Notification::warning("careful"));

        assert!(slot.dismiss(id));
        assert!(!slot.dismiss(id));
        assert!(slot.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut slot = NotificationSlot::new();
        let a = slot.show(Notification::info("a"));
        slot.dismiss(a);
        let b = slot.show(Notification::info("b"));
        assert_ne!(a, b);
    }
}
