use std::collections::HashMap;
use std::sync::Mutex;

use super::{render_command, CommandError, CommandOutput, CommandRunner};

/// Scripted command runner for testing without real subprocesses.
///
/// Every invocation is recorded as a rendered command line. Responses and
/// failures are scripted per key, where the key is the first argument (the
/// git subcommand) or the program name for bare invocations.
pub struct MockRunner {
    calls: Mutex<Vec<String>>,
    outputs: Mutex<HashMap<String, String>>,
    failures: Mutex<HashMap<String, String>>,
}

impl MockRunner {
    /// Create a runner with no scripted responses; every command succeeds
    /// with empty output
    pub fn new() -> Self {
        MockRunner {
            calls: Mutex::new(Vec::new()),
            outputs: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
        }
    }

    /// Script stdout for invocations matching `key`
    pub fn respond_with(&self, key: impl Into<String>, stdout: impl Into<String>) {
        self.outputs.lock().unwrap().insert(key.into(), stdout.into());
    }

    /// Script a failure for invocations matching `key`
    pub fn fail_with(&self, key: impl Into<String>, message: impl Into<String>) {
        self.failures
            .lock()
            .unwrap()
            .insert(key.into(), message.into());
    }

    /// Rendered command lines, in invocation order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether any recorded invocation starts with `prefix`
    pub fn invoked(&self, prefix: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|line| line.starts_with(prefix))
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::result::Result<CommandOutput, CommandError> {
        let command = render_command(program, args);
        self.calls.lock().unwrap().push(command.clone());

        let key = args.first().copied().unwrap_or(program).to_string();

        if let Some(message) = self.failures.lock().unwrap().get(&key) {
            return Err(CommandError {
                command,
                message: message.clone(),
            });
        }

        let stdout = self
            .outputs
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default();

        Ok(CommandOutput {
            stdout,
            stderr: String::new(),
        })
    }
}
