//! Error types for the notification dispatcher.

use thiserror::Error;

/// Defines the fatal errors the dispatcher can report.
///
/// Sink failures are deliberately absent from this taxonomy: delivery is
/// best-effort, and a failed notification surfaces as
/// [`DispatchOutcome::DeliveryFailed`](crate::dispatcher::DispatchOutcome)
/// rather than an error.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The payload could not be parsed into a hook event.
    #[error("Malformed event payload: {0}")]
    MalformedEvent(#[from] serde_json::Error),

    /// The event is not a notification-class event. The dispatcher is only
    /// wired to the Notification hook stage, so any other kind is caller
    /// misconfiguration.
    #[error("Unexpected event kind '{kind}', expected '{expected}'")]
    UnexpectedEventKind {
        /// The kind tag the event actually carried.
        kind: String,
        /// The kind tag the dispatcher accepts.
        expected: &'static str,
    },
}
