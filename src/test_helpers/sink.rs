use std::sync::{Arc, Mutex};

use crate::{
    models::NotificationMessage,
    sink::{NotificationSink, error::SinkError},
};

/// A sink that records every message it receives, for asserting on dispatch
/// behavior without touching the OS.
#[derive(Clone, Default)]
pub struct RecordingSink {
    sent: Arc<Mutex<Vec<NotificationMessage>>>,
}

impl RecordingSink {
    /// Creates a new, empty `RecordingSink`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages delivered so far.
    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NotificationSink for RecordingSink {
    async fn send(&self, message: &NotificationMessage) -> Result<(), SinkError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// A sink that always fails, for exercising the best-effort delivery path.
#[derive(Debug, Default)]
pub struct FailingSink;

#[async_trait::async_trait]
impl NotificationSink for FailingSink {
    async fn send(&self, _message: &NotificationMessage) -> Result<(), SinkError> {
        Err(SinkError::Internal("sink configured to fail".to_string()))
    }
}
