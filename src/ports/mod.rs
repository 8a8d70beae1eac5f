//! Ports: traits describing the side-effecting seams of the pipeline.

mod command_runner;

pub use command_runner::{CommandOutput, CommandRunner};
