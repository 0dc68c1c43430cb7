//! Data models for notifications.

/// A message to be delivered by a notification sink, with a title and body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationMessage {
    /// The title of the notification message.
    pub title: String,
    /// The body content of the notification message.
    pub body: String,
}

impl NotificationMessage {
    /// Creates a new `NotificationMessage`.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}
