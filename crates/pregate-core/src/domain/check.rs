//! Identity of the seven checks and their fixed execution order.

use serde::Serialize;
use std::fmt;

/// One named check of the pipeline.
///
/// Order of [`Check::ALL`] only decides the order in which failures are
/// logged and reported. Checks never depend on each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    GitBaseUrl,
    ProjectName,
    RepoName,
    AppName,
    Authors,
    AppVersion,
    BaseImage,
}

impl Check {
    /// Every check, in execution order.
    pub const ALL: [Check; 7] = [
        Self::GitBaseUrl,
        Self::ProjectName,
        Self::RepoName,
        Self::AppName,
        Self::Authors,
        Self::AppVersion,
        Self::BaseImage,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GitBaseUrl => "git_base_url",
            Self::ProjectName => "project_name",
            Self::RepoName => "repo_name",
            Self::AppName => "app_name",
            Self::Authors => "authors",
            Self::AppVersion => "app_version",
            Self::BaseImage => "base_image",
        }
    }

    /// Input fields the check reads.
    pub const fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::GitBaseUrl => &["git_base_url"],
            Self::ProjectName => &["project_name"],
            Self::RepoName => &["repo_name"],
            Self::AppName => &["app_name"],
            Self::Authors => &["author_names", "author_emails"],
            Self::AppVersion => &["app_version"],
            Self::BaseImage => &["base_image", "cpu_tag", "gpu_tag"],
        }
    }

    /// Whether the check talks to the network.
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::BaseImage)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
