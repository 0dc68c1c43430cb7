//! Data models for incoming hook events.

use serde::Deserialize;

/// The `hook_event_name` value that identifies a notification-class event.
pub const NOTIFICATION_KIND: &str = "Notification";

/// A single hook event as delivered by Claude Code on standard input.
///
/// The producer owns the payload schema and sends more fields than are
/// modeled here (`session_id`, `transcript_path`, ...); only the fields the
/// dispatcher needs are deserialized, and unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HookEvent {
    /// The kind tag for the event (e.g. `"Notification"`).
    pub hook_event_name: String,

    /// The human-readable message payload.
    pub message: String,

    /// Optional title override for the resulting notification.
    #[serde(default)]
    pub title: Option<String>,
}

impl HookEvent {
    /// Deserializes a hook event from a raw JSON payload.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Returns true when this event is a notification-class event.
    pub fn is_notification(&self) -> bool {
        self.hook_event_name == NOTIFICATION_KIND
    }
}
