//! Deterministic field rules.
//!
//! Each function looks at raw field values only and either passes or
//! returns the typed failure(s). The registry lookup is not here; it needs a
//! port and lives in `crate::application::pipeline`.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::ValidationError;

/// Minimum number of characters in a project name.
pub const MIN_PROJECT_NAME_CHARS: usize = 2;

/// Maximum number of single-space separated words in a project name.
pub const MAX_PROJECT_NAME_WORDS: usize = 4;

/// A scheme, then `//` and a non-empty network location.
pub const GIT_BASE_URL_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9+.-]*://[^/?#]+";
pub const REPO_NAME_PATTERN: &str = r"^[a-zA-Z0-9_-]+$";
pub const APP_NAME_PATTERN: &str = r"^[_a-zA-Z][_a-zA-Z0-9]+$";
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$";
pub const APP_VERSION_PATTERN: &str = r"^[0-9]+\.[0-9]+\.[0-9]+$";

static GIT_BASE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(GIT_BASE_URL_PATTERN).expect("valid regex"));
static REPO_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REPO_NAME_PATTERN).expect("valid regex"));
static APP_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(APP_NAME_PATTERN).expect("valid regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));
static APP_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(APP_VERSION_PATTERN).expect("valid regex"));

/// The git base URL needs a scheme and a network location.
///
/// Only the shape is checked: the location itself (port range, characters)
/// is not parsed, so `https://host:99999` passes while `https:host` does not.
pub fn validate_git_base_url(value: &str) -> Result<(), ValidationError> {
    if GIT_BASE_URL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "git_base_url",
            value: value.to_owned(),
        })
    }
}

/// At least two characters, at most four words.
///
/// Words are counted by splitting on every single space, so `"a  b"` is
/// three words.
pub fn validate_project_name(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_PROJECT_NAME_CHARS {
        return Err(ValidationError::TooShort {
            value: value.to_owned(),
            min: MIN_PROJECT_NAME_CHARS,
        });
    }

    let words = value.split(' ').count();
    if words > MAX_PROJECT_NAME_WORDS {
        return Err(ValidationError::TooManyWords {
            value: value.to_owned(),
            words,
            max: MAX_PROJECT_NAME_WORDS,
        });
    }

    Ok(())
}

pub fn validate_repo_name(value: &str) -> Result<(), ValidationError> {
    if REPO_NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCharacters {
            field: "repo_name",
            value: value.to_owned(),
        })
    }
}

pub fn validate_app_name(value: &str) -> Result<(), ValidationError> {
    if APP_NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidIdentifier {
            value: value.to_owned(),
        })
    }
}

/// Check the comma-separated author lists.
///
/// Every malformed email is reported, then the two list lengths are
/// compared. Both parts always run; neither list wins over the other.
pub fn validate_authors(names: &str, emails: &str) -> Vec<ValidationError> {
    let emails: Vec<&str> = emails.split(',').collect();

    let mut failures: Vec<ValidationError> = emails
        .iter()
        .filter(|email| !EMAIL_RE.is_match(email.trim()))
        .map(|email| ValidationError::InvalidEmail {
            value: email.trim().to_owned(),
        })
        .collect();

    let n_names = names.split(',').count();
    if n_names != emails.len() {
        failures.push(ValidationError::AuthorCountMismatch {
            names: n_names,
            emails: emails.len(),
        });
    }

    failures
}

/// Plain `MAJOR.MINOR.PATCH`, digits only.
pub fn validate_app_version(value: &str) -> Result<(), ValidationError> {
    if APP_VERSION_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSemver {
            value: value.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── git_base_url ──────────────────────────────────────────────────────

    #[test]
    fn url_with_scheme_and_host_passes() {
        assert!(validate_git_base_url("https://host").is_ok());
        assert!(validate_git_base_url("https://git.example.org/group").is_ok());
        assert!(validate_git_base_url("ssh://git@github.com:22/org").is_ok());
    }

    #[test]
    fn network_location_is_not_parsed() {
        assert!(validate_git_base_url("https://host:99999").is_ok());
        assert!(validate_git_base_url("https://my host").is_ok());
        assert!(validate_git_base_url("git+ssh://host?x=1").is_ok());
    }

    #[test]
    fn url_without_scheme_or_host_fails() {
        for value in [
            "",
            "host/path",
            "localhost:8080",
            "mailto:me@example.com",
            "https://",
            "https:host",
            "https:/host",
            "http:\\\\host",
            "https://#frag",
            "https:///path",
            "1http://host",
        ] {
            assert!(
                matches!(
                    validate_git_base_url(value),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{value:?} should be rejected"
            );
        }
    }

    // ── project_name ──────────────────────────────────────────────────────

    #[test]
    fn short_project_names_fail() {
        for value in ["", "a", "é"] {
            assert!(matches!(
                validate_project_name(value),
                Err(ValidationError::TooShort { min: 2, .. })
            ));
        }
    }

    #[test]
    fn up_to_four_words_pass() {
        assert!(validate_project_name("ab").is_ok());
        assert!(validate_project_name("My Nice Little Project").is_ok());
    }

    #[test]
    fn five_words_fail() {
        assert_eq!(
            validate_project_name("one two three four five"),
            Err(ValidationError::TooManyWords {
                value: "one two three four five".into(),
                words: 5,
                max: 4,
            })
        );
    }

    #[test]
    fn repeated_spaces_count_as_words() {
        // "a", "", "", "", "b"
        assert!(matches!(
            validate_project_name("a    b"),
            Err(ValidationError::TooManyWords { words: 5, .. })
        ));
    }

    // ── repo_name ─────────────────────────────────────────────────────────

    #[test]
    fn repo_name_allows_dash_and_underscore() {
        assert!(validate_repo_name("my-repo_2").is_ok());
        assert!(validate_repo_name("X").is_ok());
    }

    #[test]
    fn repo_name_rejects_other_characters() {
        for value in ["my repo", "my.repo", "", "repo/sub", "naïve"] {
            assert!(
                matches!(
                    validate_repo_name(value),
                    Err(ValidationError::InvalidCharacters { .. })
                ),
                "{value:?} should be rejected"
            );
        }
    }

    // ── app_name ──────────────────────────────────────────────────────────

    #[test]
    fn app_name_identifiers() {
        assert!(validate_app_name("my_app2").is_ok());
        assert!(validate_app_name("_o").is_ok());
        assert!(validate_app_name("_ok").is_ok());
        assert!(validate_app_name("2myapp").is_err());
        assert!(validate_app_name("_").is_err());
        assert!(validate_app_name("a").is_err());
        assert!(validate_app_name("my-app").is_err());
    }

    // ── authors ───────────────────────────────────────────────────────────

    #[test]
    fn matching_authors_pass() {
        assert!(validate_authors("A, B", "a@b.com, b.c+d@e-f.org").is_empty());
    }

    #[test]
    fn count_mismatch_with_valid_email() {
        assert_eq!(
            validate_authors("A,B", "a@b.com"),
            vec![ValidationError::AuthorCountMismatch {
                names: 2,
                emails: 1
            }]
        );
    }

    #[test]
    fn invalid_email_without_count_mismatch() {
        assert_eq!(
            validate_authors("A", "not-an-email"),
            vec![ValidationError::InvalidEmail {
                value: "not-an-email".into()
            }]
        );
    }

    #[test]
    fn email_failures_are_reported_before_count_mismatch() {
        let failures = validate_authors("A,B,C", "bad, a@b.com");
        assert_eq!(failures.len(), 2);
        assert!(matches!(failures[0], ValidationError::InvalidEmail { .. }));
        assert!(matches!(
            failures[1],
            ValidationError::AuthorCountMismatch {
                names: 3,
                emails: 2
            }
        ));
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert_eq!(validate_authors("A", "a@localhost").len(), 1);
    }

    // ── app_version ───────────────────────────────────────────────────────

    #[test]
    fn plain_semver_passes() {
        assert!(validate_app_version("1.2.3").is_ok());
        assert!(validate_app_version("0.10.01").is_ok());
    }

    #[test]
    fn other_versions_fail() {
        for value in ["1.2", "v1.2.3", "1.2.3-beta", "1.2.3.4", ""] {
            assert!(
                matches!(
                    validate_app_version(value),
                    Err(ValidationError::InvalidSemver { .. })
                ),
                "{value:?} should be rejected"
            );
        }
    }
}
