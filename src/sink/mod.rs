//! # Notification Sinks
//!
//! A sink is the mechanism that ultimately renders a desktop notification to
//! the user. Two implementations exist, selected by
//! [`SinkConfig`](crate::config::SinkConfig):
//!
//! - **`DesktopSink`**: calls the operating system's native notification
//!   facility.
//! - **`CommandSink`**: invokes an external notifier executable with the
//!   title and message as an argument vector.
//!
//! Both are fire-once with no retries; a delivery failure surfaces as a
//! [`SinkError`] for the dispatcher to report.

mod command;
mod desktop;
pub mod error;

pub use command::CommandSink;
pub use desktop::DesktopSink;

use crate::{config::SinkConfig, models::NotificationMessage};
use error::SinkError;

/// A delivery mechanism for desktop notifications.
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    /// Delivers a single notification message.
    async fn send(&self, message: &NotificationMessage) -> Result<(), SinkError>;
}

/// Builds the sink selected by the given (already validated) configuration.
pub fn from_config(config: &SinkConfig) -> Box<dyn NotificationSink> {
    match config {
        SinkConfig::Desktop => Box::new(DesktopSink::new()),
        SinkConfig::Command(command) => Box::new(CommandSink::new(command.clone())),
    }
}
