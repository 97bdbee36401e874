use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GitReleaseError, Result};

/// Optional file-based defaults for git-release.
///
/// Any field left unset here falls back to the CLI flag, the environment
/// variable, or the built-in default.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub dir: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub project: Option<String>,

    #[serde(default)]
    pub tag: Option<String>,
}

/// Resolved configuration for one release invocation, immutable after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Root directory scanned for changelog entries and containing the
    /// notes file
    pub working_dir: PathBuf,

    /// Notes file path, relative to `working_dir`
    pub notes_path: PathBuf,

    /// Project name component of the release identifier, original casing
    pub project: String,

    /// Version tag component of the release identifier, original casing
    pub tag: String,

    /// Suppress all mutating side effects
    pub dry_run: bool,
}

impl ReleaseConfig {
    /// Merge CLI/env values with file-based defaults and validate.
    ///
    /// The `dir`/`notes`/`project`/`tag` arguments are the already-merged
    /// flag-or-env values (clap resolves flag over env var); the file config
    /// fills in whatever is still missing. `project` and `tag` must be
    /// non-empty after merging.
    pub fn resolve(
        dir: Option<String>,
        notes: Option<String>,
        project: Option<String>,
        tag: Option<String>,
        dry_run: bool,
        file: &FileConfig,
    ) -> Result<Self> {
        let project = project.or_else(|| file.project.clone()).unwrap_or_default();
        if project.trim().is_empty() {
            return Err(GitReleaseError::config(
                "project name is required (--project or RELEASE_PROJECT)",
            ));
        }

        let tag = tag.or_else(|| file.tag.clone()).unwrap_or_default();
        if tag.trim().is_empty() {
            return Err(GitReleaseError::config(
                "release tag is required (--tag or RELEASE_TAG)",
            ));
        }

        let working_dir = dir
            .or_else(|| file.dir.clone())
            .unwrap_or_else(|| ".".to_string());
        let notes_path = notes
            .or_else(|| file.notes.clone())
            .unwrap_or_else(|| "RELEASE_NOTES.md".to_string());

        Ok(ReleaseConfig {
            working_dir: PathBuf::from(working_dir),
            notes_path: PathBuf::from(notes_path),
            project,
            tag,
            dry_run,
        })
    }

    /// Full path of the release notes file
    pub fn notes_file_path(&self) -> PathBuf {
        self.working_dir.join(&self.notes_path)
    }

    /// Message for the release commit, original casing preserved
    pub fn commit_message(&self) -> String {
        format!("Release {} {}", self.project, self.tag)
    }
}

/// Loads file-based configuration or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitrelease.toml` in current directory
/// 3. `.gitrelease.toml` in the user config directory
/// 4. Default (empty) configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(FileConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_file_config(config_path: Option<&str>) -> anyhow::Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).with_context(|| format!("failed to read config file {}", path))?
    } else if Path::new("./gitrelease.toml").exists() {
        fs::read_to_string("./gitrelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitrelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(FileConfig::default());
        }
    } else {
        return Ok(FileConfig::default());
    };

    let config: FileConfig =
        toml::from_str(&config_str).context("failed to parse config file")?;
    Ok(config)
}
