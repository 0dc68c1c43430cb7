//! Sink selection configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Provides the default notifier executable name.
fn default_program() -> String {
    "terminal-notifier".to_string()
}

/// The notification sink to deliver messages through.
///
/// In YAML this is either the bare string `desktop` or a
/// `command:` mapping:
///
/// ```yaml
/// sink: desktop
/// # or
/// sink:
///   command:
///     program: terminal-notifier
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SinkConfig {
    /// The operating system's native notification facility.
    #[default]
    Desktop,
    /// An external notifier executable invoked per notification.
    Command(CommandConfig),
}

/// Configuration for the external-command sink.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CommandConfig {
    /// The notifier executable to invoke. Resolved through `PATH` unless an
    /// absolute path is given.
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self { program: default_program() }
    }
}

/// Error types for sink configuration validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SinkConfigError {
    /// Error for an empty notifier program name.
    #[error("Notifier program cannot be empty.")]
    EmptyProgram,
}

impl SinkConfig {
    /// Validates the sink configuration.
    pub fn validate(&self) -> Result<(), SinkConfigError> {
        match self {
            // The native sink requires no validation.
            SinkConfig::Desktop => Ok(()),
            SinkConfig::Command(config) => {
                if config.program.trim().is_empty() {
                    return Err(SinkConfigError::EmptyProgram);
                }
                Ok(())
            }
        }
    }
}
