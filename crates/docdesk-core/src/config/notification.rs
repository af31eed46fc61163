//! Notification settings for the copy workflow.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Snack-bar durations and labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a success message with an Undo action stays visible.
    #[serde(default = "default_success_duration")]
    pub success_duration_ms: u64,
    /// How long an error message stays visible.
    #[serde(default = "default_error_duration")]
    pub error_duration_ms: u64,
    /// Label of the action attached to a successful copy.
    #[serde(default = "default_undo_label")]
    pub undo_label: String,
    /// Capacity of the content-copied broadcast channel.
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

impl NotificationConfig {
    /// Success duration as a [`Duration`].
    pub fn success_duration(&self) -> Duration {
        Duration::from_millis(self.success_duration_ms)
    }

    /// Error duration as a [`Duration`].
    pub fn error_duration(&self) -> Duration {
        Duration::from_millis(self.error_duration_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            success_duration_ms: default_success_duration(),
            error_duration_ms: default_error_duration(),
            undo_label: default_undo_label(),
            event_buffer: default_event_buffer(),
        }
    }
}

fn default_success_duration() -> u64 {
    10_000
}

fn default_error_duration() -> u64 {
    3_000
}

fn default_undo_label() -> String {
    "Undo".to_string()
}

fn default_event_buffer() -> usize {
    64
}
