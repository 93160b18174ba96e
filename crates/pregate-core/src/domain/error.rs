// ============================================================================
// domain/error.rs - VALIDATION FAILURE TAXONOMY
// ============================================================================

use thiserror::Error;

/// A single rule violation found by one of the checks.
///
/// All errors are:
/// - Cloneable (reports are folded into an immutable run result)
/// - Nameable (`kind()` gives a stable identifier for JSON output)
/// - Actionable (provides suggestions)
///
/// None of these are fatal on their own. The pipeline collects them and
/// only the aggregate decides whether generation is aborted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ========================================================================
    // Format Errors
    // ========================================================================
    #[error("Invalid {field} ({value})")]
    InvalidFormat { field: &'static str, value: String },

    #[error("Invalid characters in {field} ({value})")]
    InvalidCharacters { field: &'static str, value: String },

    #[error("Invalid package name ({value})")]
    InvalidIdentifier { value: String },

    #[error("Invalid app_version ({value})")]
    InvalidSemver { value: String },

    // ========================================================================
    // Length Errors
    // ========================================================================
    #[error("Invalid project name ({value}), length < {min} characters")]
    TooShort { value: String, min: usize },

    #[error("Invalid project name ({value}), {words} words > {max} words")]
    TooManyWords {
        value: String,
        words: usize,
        max: usize,
    },

    // ========================================================================
    // Author Errors
    // ========================================================================
    #[error("Invalid author_email ({value})")]
    InvalidEmail { value: String },

    #[error("Authors ({names}) not matching number of emails ({emails})")]
    AuthorCountMismatch { names: usize, emails: usize },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[error("Invalid docker image {image}:{tag} (registry returned HTTP {status})")]
    ImageNotFound {
        image: String,
        tag: String,
        status: u16,
    },
}

impl ValidationError {
    /// Stable snake-case identifier, used in machine-readable output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat { .. } => "invalid_format",
            Self::InvalidCharacters { .. } => "invalid_characters",
            Self::InvalidIdentifier { .. } => "invalid_identifier",
            Self::InvalidSemver { .. } => "invalid_semver",
            Self::TooShort { .. } => "too_short",
            Self::TooManyWords { .. } => "too_many_words",
            Self::InvalidEmail { .. } => "invalid_email",
            Self::AuthorCountMismatch { .. } => "author_count_mismatch",
            Self::ImageNotFound { .. } => "image_not_found",
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFormat { field, .. } => vec![
                format!("{field} must include a scheme and a host"),
                "Example: https://github.com/my-org".into(),
            ],
            Self::InvalidCharacters { .. } => vec![
                "Use only letters, digits, '-' and '_'".into(),
                "Examples: my-project, my_project, project123".into(),
            ],
            Self::InvalidIdentifier { .. } => vec![
                "Start with a letter or '_', then letters, digits or '_'".into(),
                "The name must be at least two characters long".into(),
            ],
            Self::InvalidSemver { .. } => vec![
                "Use MAJOR.MINOR.PATCH with digits only, e.g. 0.1.0".into(),
                "Pre-release and build suffixes are not accepted".into(),
            ],
            Self::TooShort { min, .. } => {
                vec![format!("Use at least {min} characters")]
            }
            Self::TooManyWords { max, .. } => vec![
                format!("Use at most {max} words separated by single spaces"),
                "Repeated spaces count as extra words".into(),
            ],
            Self::InvalidEmail { .. } => vec![
                "Use the local@domain.tld form".into(),
                "Separate several emails with commas".into(),
            ],
            Self::AuthorCountMismatch { .. } => vec![
                "Give exactly one email per author name".into(),
                "Both lists are comma-separated and matched by position".into(),
            ],
            Self::ImageNotFound { image, .. } => vec![
                format!("Check that '{image}' exists on the registry"),
                "Check the spelling of the CPU and GPU tags".into(),
            ],
        }
    }
}
