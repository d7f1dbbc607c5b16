use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::error::{DocsChannelError, Result};
use crate::publish::PublishCommand;

/// Something that can run a rendered publish command
pub trait CommandRunner {
    /// Run the command to completion
    ///
    /// # Arguments
    /// * `command` - The rendered publish command
    /// * `workdir` - Directory to run in; `None` means the current directory
    ///
    /// # Returns
    /// * `Ok(())` if the command exits with code 0
    /// * `Err` if it cannot be spawned or exits non-zero
    fn run(&self, command: &PublishCommand, workdir: Option<&Path>) -> Result<()>;
}

/// Runs publish commands through the platform shell
///
/// Output is inherited so the publish step's own logs reach the CI console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    fn shell() -> (&'static str, &'static str) {
        if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("sh", "-c")
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &PublishCommand, workdir: Option<&Path>) -> Result<()> {
        let (shell, flag) = Self::shell();

        let mut cmd = Command::new(shell);
        cmd.arg(flag).arg(command.as_str());

        for (key, value) in command.env_vars() {
            cmd.env(key, value);
        }

        if let Some(dir) = workdir {
            cmd.current_dir(dir);
        }

        debug!(command = %command, "running publish command");
        let status = cmd.status()?;

        if !status.success() {
            // Killed by a signal: no code to pass through.
            return Err(DocsChannelError::Publish {
                command: command.to_string(),
                code: status.code().unwrap_or(1),
            });
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::DocsTarget;
    use tempfile::TempDir;

    fn command(template: &str) -> PublishCommand {
        PublishCommand::render(
            template,
            "origin",
            "1.4.x",
            &DocsTarget {
                version: "1.4".to_string(),
                alias: "latest".to_string(),
            },
        )
    }

    #[test]
    fn test_successful_command() {
        assert!(ShellRunner.run(&command("true"), None).is_ok());
    }

    #[test]
    fn test_exit_code_is_propagated() {
        let err = ShellRunner.run(&command("exit 7"), None).unwrap_err();
        assert_eq!(err.exit_code(), 7);
        assert!(err.to_string().contains("exit 7"));
    }

    #[test]
    fn test_env_and_workdir_are_applied() {
        let dir = TempDir::new().unwrap();
        let cmd = command(
            "printf '%s %s %s' \"$DOCS_VERSION\" \"$DOCS_ALIAS\" \"$DOCS_BRANCH\" > out.txt",
        );

        ShellRunner.run(&cmd, Some(dir.path())).unwrap();

        let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(written, "1.4 latest 1.4.x");
    }
}
