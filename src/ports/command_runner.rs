use crate::domain::AppError;

/// Captured output of a completed external command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Seam over external command execution.
///
/// The pipeline only needs "run this command line to completion and give me its
/// output"; tests substitute a fake to exercise the pipeline without a real
/// front-end toolchain.
pub trait CommandRunner {
    /// Run a shell command line with extra environment variables, blocking
    /// until it exits. Non-zero exit is an [`AppError::CommandFailed`] carrying
    /// the captured output.
    fn run(&self, command: &str, envs: &[(&str, &str)]) -> Result<CommandOutput, AppError>;
}
