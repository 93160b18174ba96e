//! The input record handed to the pipeline, and the partial input it is
//! resolved from.

use serde::Deserialize;

/// Every field the gate validates, as raw text.
///
/// Values are taken verbatim: nothing here trims, lowercases or otherwise
/// repairs input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationParams {
    pub git_base_url: String,
    pub project_name: String,
    pub repo_name: String,
    pub app_name: String,
    /// Comma-separated author names.
    pub author_names: String,
    /// Comma-separated author emails, positionally matched to `author_names`.
    pub author_emails: String,
    pub app_version: String,
    pub base_image: String,
    pub cpu_tag: String,
    pub gpu_tag: String,
}

impl GenerationParams {
    /// Repository folder name derived from a project name.
    pub fn derive_repo_name(project_name: &str) -> String {
        project_name.to_lowercase().replace(' ', "-")
    }

    /// Python-style module name derived from a project name.
    pub fn derive_app_name(project_name: &str) -> String {
        project_name.to_lowercase().replace([' ', '-'], "_")
    }
}

/// Parameters as supplied by one source (flags, a parameter file).
///
/// `None` means the source did not mention the field. `Some("")` is a value
/// and is validated like any other.
///
/// Template-context key names are accepted as aliases, including the derived
/// `__repo_name` / `__app_name` the template itself renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParamsInput {
    pub git_base_url: Option<String>,
    pub project_name: Option<String>,
    #[serde(alias = "__repo_name")]
    pub repo_name: Option<String>,
    #[serde(alias = "__app_name")]
    pub app_name: Option<String>,
    #[serde(alias = "author_name")]
    pub author_names: Option<String>,
    #[serde(alias = "author_email")]
    pub author_emails: Option<String>,
    pub app_version: Option<String>,
    #[serde(alias = "docker_baseimage")]
    pub base_image: Option<String>,
    #[serde(alias = "baseimage_tag")]
    pub cpu_tag: Option<String>,
    #[serde(alias = "baseimage_gpu_tag")]
    pub gpu_tag: Option<String>,
}

impl ParamsInput {
    /// Field by field, keep `self` where present and take `fallback` elsewhere.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            git_base_url: self.git_base_url.or(fallback.git_base_url),
            project_name: self.project_name.or(fallback.project_name),
            repo_name: self.repo_name.or(fallback.repo_name),
            app_name: self.app_name.or(fallback.app_name),
            author_names: self.author_names.or(fallback.author_names),
            author_emails: self.author_emails.or(fallback.author_emails),
            app_version: self.app_version.or(fallback.app_version),
            base_image: self.base_image.or(fallback.base_image),
            cpu_tag: self.cpu_tag.or(fallback.cpu_tag),
            gpu_tag: self.gpu_tag.or(fallback.gpu_tag),
        }
    }

    /// Build the record the pipeline checks.
    ///
    /// Only an absent `repo_name` / `app_name` is derived from the project
    /// name. Other absent fields become empty and fail their checks.
    pub fn resolve(self) -> GenerationParams {
        let project_name = self.project_name.unwrap_or_default();
        let repo_name = self
            .repo_name
            .unwrap_or_else(|| GenerationParams::derive_repo_name(&project_name));
        let app_name = self
            .app_name
            .unwrap_or_else(|| GenerationParams::derive_app_name(&project_name));

        GenerationParams {
            git_base_url: self.git_base_url.unwrap_or_default(),
            project_name,
            repo_name,
            app_name,
            author_names: self.author_names.unwrap_or_default(),
            author_emails: self.author_emails.unwrap_or_default(),
            app_version: self.app_version.unwrap_or_default(),
            base_image: self.base_image.unwrap_or_default(),
            cpu_tag: self.cpu_tag.unwrap_or_default(),
            gpu_tag: self.gpu_tag.unwrap_or_default(),
        }
    }
}
