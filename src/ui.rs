//! Progress reporting for the release pipeline.
//!
//! The reporter is constructed once in `main` and handed to the pipeline
//! instead of living behind a global logger, so tests can capture exactly
//! what was reported.

use std::sync::Mutex;

use console::style;

/// Maximum characters of captured process output shown per step
const OUTPUT_LIMIT: usize = 200;

enum Sink {
    Console,
    Capture(Mutex<Vec<String>>),
}

/// Writes styled progress lines to the terminal, or accumulates plain
/// lines in memory when constructed with [Reporter::capture]
pub struct Reporter {
    sink: Sink,
}

impl Reporter {
    /// Reporter that writes styled lines to stdout/stderr
    pub fn console() -> Self {
        Reporter {
            sink: Sink::Console,
        }
    }

    /// Reporter that records plain lines in memory for inspection
    pub fn capture() -> Self {
        Reporter {
            sink: Sink::Capture(Mutex::new(Vec::new())),
        }
    }

    /// Progress line announcing a step and its parameter
    pub fn status(&self, message: &str) {
        match &self.sink {
            Sink::Console => println!("{} {}", style("→").yellow(), message),
            Sink::Capture(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(message.to_string());
                }
            }
        }
    }

    /// Success line with a green checkmark
    pub fn success(&self, message: &str) {
        match &self.sink {
            Sink::Console => println!("{} {}", style("✓").green(), message),
            Sink::Capture(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(message.to_string());
                }
            }
        }
    }

    /// Error line, printed to stderr
    pub fn error(&self, message: &str) {
        match &self.sink {
            Sink::Console => eprintln!("{} {}", style("ERROR:").red(), message),
            Sink::Capture(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(format!("ERROR: {}", message));
                }
            }
        }
    }

    /// Truncated captured process output, indented under its step
    pub fn output(&self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        let shortened = truncate_output(trimmed, OUTPUT_LIMIT);
        match &self.sink {
            Sink::Console => println!("  {}", style(&shortened).dim()),
            Sink::Capture(lines) => {
                if let Ok(mut lines) = lines.lock() {
                    lines.push(shortened);
                }
            }
        }
    }

    /// Lines recorded by a capture reporter; empty for console reporters
    pub fn captured(&self) -> Vec<String> {
        match &self.sink {
            Sink::Console => Vec::new(),
            Sink::Capture(lines) => lines.lock().map(|l| l.clone()).unwrap_or_default(),
        }
    }
}

/// Shorten process output to at most `limit` characters, marking the cut
pub fn truncate_output(raw: &str, limit: usize) -> String {
    if raw.chars().count() <= limit {
        raw.to_string()
    } else {
        let cut: String = raw.chars().take(limit).collect();
        format!("{}...", cut)
    }
}
