use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Runs command lines through the platform shell in a fixed working directory.
#[derive(Debug, Clone)]
pub struct ShellCommandRunner {
    root: PathBuf,
}

impl ShellCommandRunner {
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    fn shell(command_line: &str) -> Command {
        if cfg!(windows) {
            let mut command = Command::new("cmd");
            command.args(["/C", command_line]);
            command
        } else {
            let mut command = Command::new("sh");
            command.args(["-c", command_line]);
            command
        }
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command_line: &str, envs: &[(&str, &str)]) -> Result<CommandOutput, AppError> {
        let mut command = Self::shell(command_line);
        command.current_dir(&self.root);
        for (key, value) in envs {
            command.env(key, value);
        }

        let output = command.output().map_err(|e| AppError::CommandFailed {
            command: command_line.to_string(),
            details: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            let mut details = format!("exited with {}", output.status);
            if !stdout.trim().is_empty() {
                details.push_str(&format!("\nStdout: {}", stdout.trim_end()));
            }
            if !stderr.trim().is_empty() {
                details.push_str(&format!("\nStderr: {}", stderr.trim_end()));
            }
            return Err(AppError::CommandFailed { command: command_line.to_string(), details });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
