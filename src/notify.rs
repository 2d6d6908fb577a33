//! Transient notification toasts
//!
//! A single owned slot holds at most one notification at a time. Showing a
//! new one evicts the old immediately; dismissal is manual or automatic
//! after a fixed window.

use std::time::{Duration, Instant};

/// How long a notification stays up before auto-dismissal (5 seconds)
pub const AUTO_DISMISS: Duration = Duration::from_millis(5000);

/// Notification severity, mapped to toast color in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A single transient message
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
    pub created_at: Instant,
}

impl Notification {
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= AUTO_DISMISS
    }
}

/// Owner of the single notification slot
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    /// Show a notification, superseding any currently visible one
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) {
        self.current = Some(Notification {
            text: text.into(),
            severity,
            created_at: Instant::now(),
        });
    }

    /// Dismiss the current notification. No-op when nothing is mounted.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Expire the notification if its window has elapsed. Returns true if
    /// a notification was dismissed by this call.
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            return true;
        }
        false
    }

    /// The currently mounted notification, if any
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
