//! External command invocation layer
//!
//! This module provides a trait-based abstraction over subprocess
//! invocation, allowing for multiple implementations including real
//! process spawning and a scripted implementation for testing.
//!
//! The pipeline only ever sees [CommandRunner]; the concrete
//! implementations are:
//!
//! - [system::SystemRunner]: spawns real processes via `std::process::Command`
//! - [mock::MockRunner]: a scripted implementation for testing

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use thiserror::Error;

/// Captured output of a finished subprocess
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Failure of a subprocess invocation: spawn failure or non-zero exit
#[derive(Error, Debug, Clone, PartialEq)]
#[error("`{command}`: {message}")]
pub struct CommandError {
    /// Rendered command line (e.g. "git checkout -b release/core-v1.0")
    pub command: String,

    /// Spawn failure, or exit code and trimmed stderr of the failed process
    pub message: String,
}

/// Narrow capability interface for running external commands.
///
/// Implementors must block until the process finishes and capture its
/// output rather than inheriting the terminal. The pipeline wraps any
/// returned [CommandError] with the semantic context of the failing step.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// # Returns
    /// * `Ok(CommandOutput)` - Captured stdout/stderr on exit code 0
    /// * `Err(CommandError)` - Spawn failure or non-zero exit
    fn run(&self, program: &str, args: &[&str]) -> std::result::Result<CommandOutput, CommandError>;
}

/// Render a program and its arguments as a single displayable command line
pub fn render_command(program: &str, args: &[&str]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
