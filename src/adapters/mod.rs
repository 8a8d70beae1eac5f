//! Adapters: concrete implementations of the ports.

mod shell_command;

pub use shell_command::ShellCommandRunner;
