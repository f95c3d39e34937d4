//! Transient user notifications.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Severity of a notice (drives styling only).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A toast message shown briefly and dismissed automatically.
#[derive(Clone, Debug)]
pub struct Notice {
    /// Unique ID so a stale dismiss timer cannot hide a newer notice
    pub id: usize,
    pub level: NoticeLevel,
    pub message: String,
}

const ERROR_PREFIX: &str = "Error: ";

static NOTICE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Notice {
    fn new(level: NoticeLevel, message: String) -> Self {
        Self {
            id: NOTICE_COUNTER.fetch_add(1, Ordering::Relaxed),
            level,
            message,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message.into())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message.into())
    }

    /// Error notice for any failure, prefixed the way the panel shows them.
    ///
    /// Host messages that already carry the prefix are shown verbatim.
    pub fn failure(err: &impl fmt::Display) -> Self {
        let message = err.to_string();
        if message.starts_with(ERROR_PREFIX) {
            Self::error(message)
        } else {
            Self::error(format!("{}{}", ERROR_PREFIX, message))
        }
    }
}

impl PartialEq for Notice {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID
        self.level == other.level && self.message == other.message
    }
}
