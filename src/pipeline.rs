//! The release orchestration pipeline.
//!
//! Six steps, executed strictly in order: branch creation, notes-file
//! ensure, changelog generation, staging, commit, tag. The first failing
//! step aborts the run; no later step's side effect is performed and no
//! cleanup of earlier steps is attempted. Operators inspect and reset the
//! repository manually after a failure.
//!
//! Steps are declarative descriptors. Each carries a semantic label, the
//! parameter it acts on, a `mutating` flag, and the action itself; the
//! runner loop decides per step whether dry-run suppresses the side effect.

use std::fs;

use crate::command::{render_command, CommandRunner};
use crate::config::ReleaseConfig;
use crate::error::{GitReleaseError, Result};
use crate::identifier::ReleaseIdentifier;
use crate::ui::Reporter;

type StepAction = Box<dyn Fn(&dyn CommandRunner) -> Result<Option<String>>>;

/// One pipeline step: what it is called, what it acts on, whether it
/// mutates repository or filesystem state, and how to run it
struct Step {
    label: &'static str,
    detail: String,
    mutating: bool,
    action: StepAction,
}

/// Runs the six-step release pipeline for one resolved configuration
pub struct ReleasePipeline {
    config: ReleaseConfig,
    identifier: ReleaseIdentifier,
}

impl ReleasePipeline {
    /// Build the pipeline; the release identifier is derived once here and
    /// reused by every step that names the release
    pub fn new(config: ReleaseConfig) -> Self {
        let identifier = ReleaseIdentifier::new(&config.project, &config.tag);
        ReleasePipeline { config, identifier }
    }

    pub fn identifier(&self) -> &ReleaseIdentifier {
        &self.identifier
    }

    /// Execute all steps in order, aborting on the first failure.
    ///
    /// Every step announces its intent before running. In dry-run mode
    /// mutating steps are announced but skipped; the changelog step still
    /// runs (without the prepend flags) so its output can be inspected.
    pub fn run(&self, runner: &dyn CommandRunner, reporter: &Reporter) -> Result<()> {
        for step in self.steps() {
            reporter.status(&format!("{} ({})", step.label, step.detail));

            if self.config.dry_run && step.mutating {
                reporter.status(&format!("dry-run: skipped {}", step.label));
                continue;
            }

            if let Some(output) = (step.action)(runner)? {
                reporter.output(&output);
            }
        }
        Ok(())
    }

    fn steps(&self) -> Vec<Step> {
        let branch = self.identifier.branch();
        let notes_file = self.config.notes_file_path();
        let notes_path = notes_file.display().to_string();
        let include_path = self.config.working_dir.join("**").join("*");
        let commit_message = self.config.commit_message();
        let tag = self.identifier.as_str().to_string();

        let mut changelog_args: Vec<String> = vec![
            "cliff".to_string(),
            "--include-path".to_string(),
            include_path.display().to_string(),
            "--strip".to_string(),
            "all".to_string(),
            "--tag".to_string(),
            tag.clone(),
        ];
        if !self.config.dry_run {
            changelog_args.push("--unreleased".to_string());
            changelog_args.push("--prepend".to_string());
            changelog_args.push(notes_path.clone());
        }
        let changelog_detail = {
            let refs: Vec<&str> = changelog_args.iter().map(String::as_str).collect();
            render_command("git", &refs)
        };

        let stage_path = notes_path.clone();
        let ensure_file = notes_file.clone();

        vec![
            Step {
                label: "creating release branch",
                detail: branch.clone(),
                mutating: true,
                action: Box::new(move |runner| {
                    let out = runner
                        .run("git", &["checkout", "-b", &branch])
                        .map_err(|e| GitReleaseError::branch(e.to_string()))?;
                    Ok(Some(out.stdout))
                }),
            },
            Step {
                label: "ensuring release notes file",
                detail: notes_path.clone(),
                mutating: true,
                action: Box::new(move |_runner| {
                    if ensure_file.exists() {
                        return Ok(None);
                    }
                    // Handle is only needed to create the file; drop it
                    // before the pipeline continues.
                    fs::File::create(&ensure_file)
                        .map_err(|e| GitReleaseError::file(e.to_string()))?;
                    Ok(Some(format!("created empty {}", ensure_file.display())))
                }),
            },
            Step {
                label: "generating release notes",
                detail: changelog_detail,
                mutating: false,
                action: Box::new(move |runner| {
                    let args: Vec<&str> = changelog_args.iter().map(String::as_str).collect();
                    let out = runner
                        .run("git", &args)
                        .map_err(|e| GitReleaseError::changelog(e.to_string()))?;
                    Ok(Some(out.stdout))
                }),
            },
            Step {
                label: "staging release notes",
                detail: notes_path,
                mutating: true,
                action: Box::new(move |runner| {
                    let out = runner
                        .run("git", &["add", &stage_path])
                        .map_err(|e| GitReleaseError::stage(e.to_string()))?;
                    Ok(Some(out.stdout))
                }),
            },
            Step {
                label: "committing release notes",
                detail: commit_message.clone(),
                mutating: true,
                action: Box::new(move |runner| {
                    let out = runner
                        .run("git", &["commit", "-m", &commit_message])
                        .map_err(|e| GitReleaseError::commit(e.to_string()))?;
                    Ok(Some(out.stdout))
                }),
            },
            Step {
                label: "creating git tag",
                detail: tag.clone(),
                mutating: true,
                action: Box::new(move |runner| {
                    let out = runner
                        .run("git", &["tag", &tag])
                        .map_err(|e| GitReleaseError::tag(e.to_string()))?;
                    Ok(Some(out.stdout))
                }),
            },
        ]
    }
}
