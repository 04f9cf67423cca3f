//! Notification Sink abstraction for user-visible messages.
//!
//! # Design
//! The response interceptor produces a structured [`Notification`] value and
//! the client dispatches it through this trait, so the transport core carries
//! no compile-time dependency on any UI toolkit. Applications plug in their
//! own sink (toast, status bar, whatever); [`TracingSink`] is the default and
//! just logs.

/// Severity of a user-visible message, mirroring the usual toast levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Fixed message shown when the server reports the session as expired.
pub const SESSION_EXPIRED_MESSAGE: &str = "登陆过期，请重新登录";

/// A user-visible message produced by the response interceptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn error(message: &str) -> Self {
        Self {
            severity: Severity::Error,
            message: message.to_string(),
        }
    }
}

/// Displays a notification to the user.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Default sink that routes notifications to the `tracing` log stream.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Error => tracing::error!(message = %notification.message, "notification"),
            Severity::Warning => tracing::warn!(message = %notification.message, "notification"),
            Severity::Info => tracing::info!(message = %notification.message, "notification"),
        }
    }
}
