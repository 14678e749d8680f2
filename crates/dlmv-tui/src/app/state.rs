//! Application state types.

use std::time::{Duration, Instant};

/// Application mode representing the current UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    /// Help overlay.
    Help,
    /// Custom-path prompt (text input mode).
    PathInput,
    /// A clone has been requested; the next loop iteration runs it while the
    /// "cloning" banner is on screen. Input is ignored.
    Cloning,
    Quit,
}

/// Severity of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// A short-lived on-screen notification. Never alters navigation state;
/// auto-dismissed after a fixed TTL.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: MessageLevel,
    shown_at: Instant,
}

impl StatusMessage {
    /// An informational message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            shown_at: Instant::now(),
        }
    }

    /// An error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            shown_at: Instant::now(),
        }
    }

    /// Whether the message has outlived `ttl`.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }
}
