//! Transient user-facing notifications.

use std::time::Duration;

/// How long a notice stays on screen
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeLevel {
    #[default]
    Info,
    Error,
}

impl NoticeLevel {
    /// CSS modifier class
    pub fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notification-info",
            NoticeLevel::Error => "notification-error",
        }
    }
}

/// A short message shown in the corner and dismissed on a timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }

    /// Feedback after a favorite toggle
    pub fn favorite_changed(favorite: bool) -> Self {
        let verb = if favorite { "added to" } else { "removed from" };
        Self::info(format!("Item {} favorites!", verb))
    }
}
