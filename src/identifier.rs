use std::fmt;

/// Canonical release identifier: lower-cased `<project>-<tag>`.
///
/// Computed once per invocation and reused everywhere a release name is
/// needed: the release branch suffix, the changelog tag, and the git tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseIdentifier {
    name: String,
}

impl ReleaseIdentifier {
    /// Derive the identifier from the project name and release tag
    pub fn new(project: &str, tag: &str) -> Self {
        ReleaseIdentifier {
            name: format!("{}-{}", project.to_lowercase(), tag.to_lowercase()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Release branch name (e.g. "release/core-v2024.12.01")
    pub fn branch(&self) -> String {
        format!("release/{}", self.name)
    }
}

impl fmt::Display for ReleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
