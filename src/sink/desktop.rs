//! Native desktop notification sink.

use notify_rust::Notification;

use super::{NotificationSink, error::SinkError};
use crate::models::NotificationMessage;

/// Delivers notifications through the operating system's native
/// notification facility.
#[derive(Debug, Default)]
pub struct DesktopSink;

impl DesktopSink {
    /// Creates a new `DesktopSink`.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl NotificationSink for DesktopSink {
    async fn send(&self, message: &NotificationMessage) -> Result<(), SinkError> {
        let mut notification = Notification::new();
        notification.summary(&message.title).body(&message.body);

        // `show` blocks on the platform call until the OS acknowledges the
        // notification, so run it off the async worker threads.
        tokio::task::spawn_blocking(move || notification.show())
            .await
            .map_err(|e| SinkError::Internal(e.to_string()))??;

        Ok(())
    }
}
