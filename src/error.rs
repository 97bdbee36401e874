use thiserror::Error;

/// Unified error type for git-release operations
///
/// Each pipeline step has its own variant so a failure always carries the
/// semantic context of the step it aborted, wrapped around the underlying
/// tool's message.
#[derive(Error, Debug)]
pub enum GitReleaseError {
    #[error("Branch creation failed: {0}")]
    BranchCreation(String),

    #[error("Release notes file creation failed: {0}")]
    FileCreation(String),

    #[error("Changelog generation failed: {0}")]
    Changelog(String),

    #[error("Staging release notes failed: {0}")]
    Stage(String),

    #[error("Commit failed: {0}")]
    Commit(String),

    #[error("Tag creation failed: {0}")]
    Tag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-release
pub type Result<T> = std::result::Result<T, GitReleaseError>;

impl GitReleaseError {
    /// Create a branch-creation error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        GitReleaseError::BranchCreation(msg.into())
    }

    /// Create a notes-file creation error with context
    pub fn file(msg: impl Into<String>) -> Self {
        GitReleaseError::FileCreation(msg.into())
    }

    /// Create a changelog-generation error with context
    pub fn changelog(msg: impl Into<String>) -> Self {
        GitReleaseError::Changelog(msg.into())
    }

    /// Create a staging error with context
    pub fn stage(msg: impl Into<String>) -> Self {
        GitReleaseError::Stage(msg.into())
    }

    /// Create a commit error with context
    pub fn commit(msg: impl Into<String>) -> Self {
        GitReleaseError::Commit(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        GitReleaseError::Tag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitReleaseError::Config(msg.into())
    }
}
