//! Message filtering applied before dispatch.
//!
//! A filter decides whether a given event's message should actually reach
//! the notification sink. The recognized policies are the ones expressible
//! in [`FilterConfig`](crate::config::FilterConfig): no filter, or a
//! case-insensitive substring match.

use crate::config::FilterConfig;

/// A compiled message filter.
///
/// Built once from the configuration at startup; the keyword is lowercased
/// at construction so each match is a single `contains` check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageFilter {
    /// Every message passes.
    None,
    /// Only messages containing the keyword pass.
    Substring {
        /// The keyword to look for, lowercased.
        keyword: String,
    },
}

impl MessageFilter {
    /// Builds a filter from its configuration.
    pub fn from_config(config: &FilterConfig) -> Self {
        match config {
            FilterConfig::None => MessageFilter::None,
            FilterConfig::Substring(keyword) => {
                MessageFilter::Substring { keyword: keyword.to_lowercase() }
            }
        }
    }

    /// Returns true when the message should be dispatched.
    pub fn matches(&self, message: &str) -> bool {
        match self {
            MessageFilter::None => true,
            MessageFilter::Substring { keyword } => {
                message.to_lowercase().contains(keyword.as_str())
            }
        }
    }
}
