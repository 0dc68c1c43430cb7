//! Configuration module for herald.

mod app_config;
mod filter;
mod sink;

pub use app_config::{AppConfig, AppConfigError};
pub use filter::{FilterConfig, FilterConfigError};
pub use sink::{CommandConfig, SinkConfig, SinkConfigError};
