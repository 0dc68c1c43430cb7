//! Error types for notification sinks.

use std::process::ExitStatus;

use thiserror::Error;

/// Defines the possible errors that can occur while delivering a
/// notification.
///
/// Delivery is best-effort: these errors are reported at the dispatch
/// boundary but never fail the hook process.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The OS notification facility rejected or failed the notification.
    #[error("Desktop notification failed: {0}")]
    Desktop(#[from] notify_rust::error::Error),

    /// The notifier executable could not be started.
    #[error("Failed to spawn notifier '{program}': {source}")]
    Spawn {
        /// The executable that was being spawned.
        program: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The notifier executable exited with a non-zero status.
    #[error("Notifier '{program}' exited with {status}")]
    CommandFailed {
        /// The executable that was invoked.
        program: String,
        /// The exit status it returned.
        status: ExitStatus,
    },

    /// An internal error that should not occur under normal circumstances.
    #[error("Internal error: {0}")]
    Internal(String),
}
