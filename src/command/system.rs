use std::process::Command;

use super::{render_command, CommandError, CommandOutput, CommandRunner};

/// Runs commands as real subprocesses.
///
/// Each invocation blocks until the process exits; stdout and stderr are
/// captured so the pipeline can report them. Commands run in the process
/// working directory and inherit its environment, matching how the tool is
/// launched from a repository root.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::result::Result<CommandOutput, CommandError> {
        let command = render_command(program, args);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| CommandError {
                command: command.clone(),
                message: format!("failed to execute: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CommandError {
                command,
                message: format!(
                    "exit code {}: {}",
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            });
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
