//! Filter policy configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The filter policy applied to event messages before dispatch.
///
/// In YAML this is either the bare string `none` or a
/// `substring: <keyword>` mapping:
///
/// ```yaml
/// filter: none
/// # or
/// filter:
///   substring: permission
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterConfig {
    /// Dispatch every notification event.
    #[default]
    None,
    /// Dispatch only events whose message contains the keyword. The match is
    /// case-insensitive.
    Substring(String),
}

/// Error types for filter configuration validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterConfigError {
    /// Error for an empty substring keyword, which would match every message.
    #[error("Filter keyword cannot be empty.")]
    EmptyKeyword,
}

impl FilterConfig {
    /// Validates the filter configuration.
    pub fn validate(&self) -> Result<(), FilterConfigError> {
        match self {
            FilterConfig::None => Ok(()),
            FilterConfig::Substring(keyword) => {
                if keyword.trim().is_empty() {
                    return Err(FilterConfigError::EmptyKeyword);
                }
                Ok(())
            }
        }
    }
}
