//! External notifier executable sink.

use std::process::Stdio;

use tokio::process::Command;

use super::{NotificationSink, error::SinkError};
use crate::{config::CommandConfig, models::NotificationMessage};

/// Delivers notifications by invoking an external notifier executable
/// (e.g. [`terminal-notifier`](https://github.com/julienXX/terminal-notifier))
/// as `<program> -title <title> -message <body>`.
///
/// The title and body are passed as discrete argv elements, never through a
/// shell, so message content cannot alter the command being run.
#[derive(Debug)]
pub struct CommandSink {
    config: CommandConfig,
}

impl CommandSink {
    /// Creates a new `CommandSink` with the given configuration.
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl NotificationSink for CommandSink {
    async fn send(&self, message: &NotificationMessage) -> Result<(), SinkError> {
        // Hook stdout belongs to the producer; keep the notifier off it.
        let status = Command::new(&self.config.program)
            .arg("-title")
            .arg(&message.title)
            .arg("-message")
            .arg(&message.body)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .await
            .map_err(|source| SinkError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(SinkError::CommandFailed {
                program: self.config.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    /// Writes an executable stub notifier that records its argv, one element
    /// per line, and exits with the given code.
    fn create_stub_notifier(dir: &TempDir, exit_code: i32) -> (String, std::path::PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let argv_path = dir.path().join("argv.txt");
        let script_path = dir.path().join("stub-notifier");
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit {}\n",
            argv_path.display(),
            exit_code
        );
        fs::write(&script_path, script).unwrap();
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();

        (script_path.to_string_lossy().into_owned(), argv_path)
    }

    fn create_sink(program: &str) -> CommandSink {
        CommandSink::new(CommandConfig { program: program.to_string() })
    }

    #[tokio::test]
    async fn passes_title_and_message_as_discrete_arguments() {
        let dir = TempDir::new().unwrap();
        let (program, argv_path) = create_stub_notifier(&dir, 0);

        let message =
            NotificationMessage::new("Claude Code", "Awaiting your permission to proceed");
        create_sink(&program).send(&message).await.unwrap();

        let argv = fs::read_to_string(argv_path).unwrap();
        let args: Vec<&str> = argv.lines().collect();
        assert_eq!(
            args,
            vec!["-title", "Claude Code", "-message", "Awaiting your permission to proceed"]
        );
    }

    #[tokio::test]
    async fn quotes_in_message_do_not_corrupt_the_invocation() {
        let dir = TempDir::new().unwrap();
        let (program, argv_path) = create_stub_notifier(&dir, 0);

        let message = NotificationMessage::new("Claude Code", r#"He said "hi""#);
        create_sink(&program).send(&message).await.unwrap();

        let argv = fs::read_to_string(argv_path).unwrap();
        let args: Vec<&str> = argv.lines().collect();
        assert_eq!(args, vec!["-title", "Claude Code", "-message", r#"He said "hi""#]);
    }

    #[tokio::test]
    async fn shell_metacharacters_are_inert() {
        let dir = TempDir::new().unwrap();
        let (program, argv_path) = create_stub_notifier(&dir, 0);
        let canary = dir.path().join("canary");

        let body = format!("done; touch {}", canary.display());
        let message = NotificationMessage::new("Claude Code", body.clone());
        create_sink(&program).send(&message).await.unwrap();

        // The payload arrives as one argv element and nothing got executed.
        let argv = fs::read_to_string(argv_path).unwrap();
        let args: Vec<&str> = argv.lines().collect();
        assert_eq!(args, vec!["-title", "Claude Code", "-message", body.as_str()]);
        assert!(!canary.exists());
    }

    #[tokio::test]
    async fn nonzero_exit_is_reported_as_command_failed() {
        let dir = TempDir::new().unwrap();
        let (program, _) = create_stub_notifier(&dir, 3);

        let message = NotificationMessage::new("Claude Code", "hello");
        let result = create_sink(&program).send(&message).await;

        match result {
            Err(SinkError::CommandFailed { program: p, status }) => {
                assert_eq!(p, program);
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_program_is_reported_as_spawn_error() {
        let message = NotificationMessage::new("Claude Code", "hello");
        let result = create_sink("/nonexistent/notifier-binary").send(&message).await;

        assert!(matches!(result, Err(SinkError::Spawn { .. })));
    }
}
