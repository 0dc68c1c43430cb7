//! # Notification Dispatcher
//!
//! This module is responsible for turning one raw hook event payload into at
//! most one desktop notification. It is the entire pipeline of the binary:
//! parse, validate, filter, dispatch.
//!
//! ## Workflow
//!
//! 1. The `Dispatcher` is built from the validated [`AppConfig`] at startup,
//!    holding the default title, the compiled [`MessageFilter`], and the
//!    configured [`NotificationSink`].
//! 2. `run` deserializes the raw payload into a [`HookEvent`] and confirms
//!    it is a notification-class event; either failure is fatal and maps to
//!    a non-zero process exit.
//! 3. The filter inspects the event message. A rejected message is a
//!    successful no-op (`Filtered`).
//! 4. The [`NotificationMessage`] is handed to the sink. A sink failure is
//!    logged at warning level and reported as `DeliveryFailed`, never as an
//!    error: a missed notification is not mission-critical and must not
//!    fail the hook.

pub mod error;

use crate::{
    config::AppConfig,
    filter::MessageFilter,
    models::{HookEvent, NOTIFICATION_KIND, NotificationMessage},
    sink::{self, NotificationSink},
};
use error::DispatchError;

/// The terminal state of one dispatcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event passed the filter and the sink accepted the message.
    Dispatched,
    /// The filter rejected the event; the sink was never invoked.
    Filtered,
    /// The sink failed; the failure was logged and swallowed because
    /// delivery is best-effort.
    DeliveryFailed,
}

/// Dispatches a single hook event to the configured notification sink.
pub struct Dispatcher {
    /// Title used when the event does not carry one.
    title: String,
    /// Filter applied to the event message before dispatch.
    filter: MessageFilter,
    /// The sink that delivers the notification.
    sink: Box<dyn NotificationSink>,
}

impl Dispatcher {
    /// Creates a new `Dispatcher` from its parts.
    pub fn new(
        title: impl Into<String>,
        filter: MessageFilter,
        sink: Box<dyn NotificationSink>,
    ) -> Self {
        Self { title: title.into(), filter, sink }
    }

    /// Creates a `Dispatcher` from a validated application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.title.clone(),
            MessageFilter::from_config(&config.filter),
            sink::from_config(&config.sink),
        )
    }

    /// Runs the pipeline over one raw payload.
    ///
    /// # Returns
    ///
    /// * `Ok(outcome)` - The event was handled; see [`DispatchOutcome`].
    /// * `Err(DispatchError)` - The payload was malformed or not a
    ///   notification-class event.
    pub async fn run(&self, raw: &str) -> Result<DispatchOutcome, DispatchError> {
        let event = HookEvent::from_json(raw)?;

        if !event.is_notification() {
            return Err(DispatchError::UnexpectedEventKind {
                kind: event.hook_event_name,
                expected: NOTIFICATION_KIND,
            });
        }

        if !self.filter.matches(&event.message) {
            tracing::debug!(message = %event.message, "event filtered out, skipping dispatch");
            return Ok(DispatchOutcome::Filtered);
        }

        let message = NotificationMessage {
            title: event.title.unwrap_or_else(|| self.title.clone()),
            body: event.message,
        };

        match self.sink.send(&message).await {
            Ok(()) => {
                tracing::info!(title = %message.title, "notification dispatched");
                Ok(DispatchOutcome::Dispatched)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to deliver notification");
                Ok(DispatchOutcome::DeliveryFailed)
            }
        }
    }
}
