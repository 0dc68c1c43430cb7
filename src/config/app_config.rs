use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use super::{FilterConfig, FilterConfigError, SinkConfig, SinkConfigError};

/// Provides the default notification title.
fn default_title() -> String {
    "Claude Code".to_string()
}

/// Application configuration for herald.
///
/// Every key is optional: a hook installed with no configuration at all runs
/// with native desktop notifications, no filter, and the default title.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Notification title used when the event does not carry one.
    #[serde(default = "default_title")]
    pub title: String,

    /// Filter policy applied to event messages before dispatch.
    #[serde(default)]
    pub filter: FilterConfig,

    /// The notification sink to deliver messages through.
    #[serde(default)]
    pub sink: SinkConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            filter: FilterConfig::default(),
            sink: SinkConfig::default(),
        }
    }
}

/// Errors that can occur while loading the application configuration.
#[derive(Debug, Error)]
pub enum AppConfigError {
    /// The configuration file could not be read or parsed.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The filter configuration is invalid.
    #[error("Invalid filter configuration: {0}")]
    Filter(#[from] FilterConfigError),

    /// The sink configuration is invalid.
    #[error("Invalid sink configuration: {0}")]
    Sink(#[from] SinkConfigError),
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration directory.
    ///
    /// Sources are layered: `herald.yaml` in `config_dir` (default
    /// `.claude`, missing file allowed), then environment variables with the
    /// `HERALD__` prefix (e.g. `HERALD__TITLE`,
    /// `HERALD__FILTER__SUBSTRING`).
    pub fn new(config_dir: Option<&str>) -> Result<Self, AppConfigError> {
        let config_dir_str = config_dir.unwrap_or(".claude");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/herald.yaml", config_dir_str)).required(false))
            .add_source(Environment::with_prefix("HERALD").separator("__"))
            .build()?;
        let config: Self = s.try_deserialize()?;

        config.filter.validate()?;
        config.sink.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use tempfile::TempDir;

    use super::*;
    use crate::config::CommandConfig;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("herald.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::new(dir.path().to_str()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.title, "Claude Code");
    }

    #[test]
    fn loads_filter_and_sink_from_yaml() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
title: "Claude"
filter:
  substring: permission
sink:
  command:
    program: notify-send
"#,
        );

        let config = AppConfig::new(dir.path().to_str()).unwrap();
        assert_eq!(config.title, "Claude");
        assert_eq!(config.filter, FilterConfig::Substring("permission".to_string()));
        assert_eq!(
            config.sink,
            SinkConfig::Command(CommandConfig { program: "notify-send".to_string() })
        );
    }

    #[test]
    fn bare_string_variants_parse() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
filter: none
sink: desktop
"#,
        );

        let config = AppConfig::new(dir.path().to_str()).unwrap();
        assert_eq!(config.filter, FilterConfig::None);
        assert_eq!(config.sink, SinkConfig::Desktop);
    }

    #[test]
    fn invalid_sink_configuration_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
sink:
  command:
    program: ""
"#,
        );

        let result = AppConfig::new(dir.path().to_str());
        assert!(matches!(result, Err(AppConfigError::Sink(SinkConfigError::EmptyProgram))));
    }

    #[test]
    fn invalid_filter_configuration_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
filter:
  substring: ""
"#,
        );

        let result = AppConfig::new(dir.path().to_str());
        assert!(matches!(result, Err(AppConfigError::Filter(FilterConfigError::EmptyKeyword))));
    }

    #[test]
    fn malformed_yaml_is_a_load_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "sink: [ unclosed");

        let result = AppConfig::new(dir.path().to_str());
        assert!(matches!(result, Err(AppConfigError::Load(_))));
    }
}
