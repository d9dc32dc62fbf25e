// Status line messages.
// Short-lived feedback for actions like opening links or copying text.

use chrono::{DateTime, Utc};

/// Status message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusMessage {
    const VISIBLE_SECS: i64 = 5;

    pub fn info(message: impl Into<String>) -> Self {
        Self::at_level(StatusLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::at_level(StatusLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::at_level(StatusLevel::Error, message)
    }

    fn at_level(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Whether the message should still be shown at `now`.
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.timestamp).num_seconds() < Self::VISIBLE_SECS
    }
}
