//! Notifications
//!
//! Transient status messages shown above the list.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Error }
    }

    /// CSS class while visible
    pub fn class(&self) -> String {
        format!("{} {} show", BASE_CLASS, self.kind)
    }

    /// Console line, e.g. `[ERROR] Error loading todos: HTTP Error 500`
    pub fn log_line(&self) -> String {
        format!("[{}] {}", self.kind.as_str().to_uppercase(), self.message)
    }
}

/// CSS class of the hidden notification element
pub const BASE_CLASS: &str = "notification";

/// The notification currently on screen.
///
/// `seq` identifies which show() call owns the dismiss timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotification {
    pub seq: u32,
    pub notification: Notification,
}

/// Whether the dismiss timer of show() call `seq` still owns the screen
pub fn is_current(active: Option<&ActiveNotification>, seq: u32) -> bool {
    active.is_some_and(|a| a.seq == seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_and_log_line() {
        let n = Notification::error("Error adding todo: HTTP Error 500");
        assert_eq!(n.class(), "notification error show");
        assert_eq!(n.log_line(), "[ERROR] Error adding todo: HTTP Error 500");
        assert_eq!(n.kind, NotificationKind::Error);

        let n = Notification::success("Todo deleted successfully!");
        assert_eq!(n.class(), "notification success show");
        assert_eq!(n.log_line(), "[SUCCESS] Todo deleted successfully!");
    }

    #[test]
    fn test_stale_timer_does_not_dismiss_newer_notification() {
        let active = ActiveNotification { seq: 2, notification: Notification::success("second") };
        assert!(is_current(Some(&active), 2));
        assert!(!is_current(Some(&active), 1));
        assert!(!is_current(None, 2));
    }
}
