// tests/pipeline_test.rs
//
// Orchestration-surface tests over the scripted runner: step ordering,
// fail-fast behavior, and dry-run reporting, without touching real git.

use git_release::command::MockRunner;
use git_release::config::{FileConfig, ReleaseConfig};
use git_release::pipeline::ReleasePipeline;
use git_release::ui::Reporter;
use git_release::GitReleaseError;
use tempfile::TempDir;

fn config_in(dir: &TempDir, dry_run: bool) -> ReleaseConfig {
    ReleaseConfig::resolve(
        Some(dir.path().display().to_string()),
        None,
        Some("core".to_string()),
        Some("v2024.12.01".to_string()),
        dry_run,
        &FileConfig::default(),
    )
    .unwrap()
}

#[test]
fn test_reporter_announces_every_step_in_order() {
    let dir = TempDir::new().unwrap();
    let runner = MockRunner::new();
    let reporter = Reporter::capture();

    ReleasePipeline::new(config_in(&dir, false))
        .run(&runner, &reporter)
        .unwrap();

    let lines = reporter.captured();
    let labels = [
        "creating release branch",
        "ensuring release notes file",
        "generating release notes",
        "staging release notes",
        "committing release notes",
        "creating git tag",
    ];

    let mut last_index = 0;
    for label in labels {
        let index = lines
            .iter()
            .position(|l| l.contains(label))
            .unwrap_or_else(|| panic!("no reporter line for '{}'", label));
        assert!(
            index >= last_index,
            "'{}' reported out of order",
            label
        );
        last_index = index;
    }
}

#[test]
fn test_step_announcements_carry_parameters() {
    let dir = TempDir::new().unwrap();
    let runner = MockRunner::new();
    let reporter = Reporter::capture();

    ReleasePipeline::new(config_in(&dir, false))
        .run(&runner, &reporter)
        .unwrap();

    let lines = reporter.captured();
    assert!(lines
        .iter()
        .any(|l| l.contains("creating release branch") && l.contains("release/core-v2024.12.01")));
    assert!(lines
        .iter()
        .any(|l| l.contains("committing release notes") && l.contains("Release core v2024.12.01")));
    assert!(lines
        .iter()
        .any(|l| l.contains("creating git tag") && l.contains("core-v2024.12.01")));
}

#[test]
fn test_failure_stops_reporting_later_steps() {
    let dir = TempDir::new().unwrap();
    let runner = MockRunner::new();
    runner.fail_with("add", "fatal: index file locked");
    let reporter = Reporter::capture();

    let err = ReleasePipeline::new(config_in(&dir, false))
        .run(&runner, &reporter)
        .unwrap_err();

    assert!(matches!(err, GitReleaseError::Stage(_)));
    let lines = reporter.captured();
    assert!(!lines.iter().any(|l| l.contains("committing release notes")));
    assert!(!lines.iter().any(|l| l.contains("creating git tag")));
}

#[test]
fn test_error_carries_failed_command_line() {
    let dir = TempDir::new().unwrap();
    let runner = MockRunner::new();
    runner.fail_with("checkout", "fatal: working tree has modifications");
    let reporter = Reporter::capture();

    let err = ReleasePipeline::new(config_in(&dir, false))
        .run(&runner, &reporter)
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.starts_with("Branch creation failed"));
    assert!(msg.contains("git checkout -b release/core-v2024.12.01"));
    assert!(msg.contains("working tree has modifications"));
}

#[test]
fn test_dry_run_leaves_working_dir_untouched() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("existing.txt"), "keep me").unwrap();

    let runner = MockRunner::new();
    runner.respond_with("cliff", "## core-v2024.12.01\n- pending change\n");
    let reporter = Reporter::capture();

    ReleasePipeline::new(config_in(&dir, true))
        .run(&runner, &reporter)
        .unwrap();

    let entries: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["existing.txt".to_string()]);

    // The changelog output still reached the log stream.
    assert!(reporter
        .captured()
        .iter()
        .any(|l| l.contains("pending change")));
}

#[test]
fn test_dry_run_issues_no_mutating_git_commands() {
    let dir = TempDir::new().unwrap();
    let runner = MockRunner::new();
    let reporter = Reporter::capture();

    ReleasePipeline::new(config_in(&dir, true))
        .run(&runner, &reporter)
        .unwrap();

    assert!(!runner.invoked("git checkout"));
    assert!(!runner.invoked("git add"));
    assert!(!runner.invoked("git commit"));
    assert!(!runner.invoked("git tag"));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_long_process_output_is_truncated_in_report() {
    let dir = TempDir::new().unwrap();
    let runner = MockRunner::new();
    runner.respond_with("cliff", "x".repeat(5000));
    let reporter = Reporter::capture();

    ReleasePipeline::new(config_in(&dir, true))
        .run(&runner, &reporter)
        .unwrap();

    let longest = reporter
        .captured()
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap();
    assert!(longest < 500, "process output was not truncated");
}
