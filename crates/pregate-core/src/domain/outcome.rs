//! Per-check reports and the run result folded from them.

use serde::{Serialize, Serializer};

use crate::domain::{check::Check, error::ValidationError};

/// What one check found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub check: Check,
    pub failures: Vec<ValidationError>,
    /// Inconclusive findings that do not fail the check (registry timeouts).
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn pass(check: Check) -> Self {
        Self {
            check,
            failures: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Report built from a single-failure rule.
    pub fn from_result(check: Check, result: Result<(), ValidationError>) -> Self {
        Self {
            check,
            failures: result.err().into_iter().collect(),
            warnings: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Aggregate outcome of one pipeline run.
///
/// Immutable once built. Reports keep the pipeline's execution order, so
/// [`RunResult::failures`] yields failures in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    reports: Vec<CheckReport>,
}

impl RunResult {
    pub fn reports(&self) -> &[CheckReport] {
        &self.reports
    }

    pub fn failures(&self) -> impl Iterator<Item = (Check, &ValidationError)> {
        self.reports
            .iter()
            .flat_map(|r| r.failures.iter().map(move |f| (r.check, f)))
    }

    pub fn failure_messages(&self) -> Vec<String> {
        self.failures().map(|(_, f)| f.to_string()).collect()
    }

    pub fn warnings(&self) -> impl Iterator<Item = (Check, &str)> {
        self.reports
            .iter()
            .flat_map(|r| r.warnings.iter().map(move |w| (r.check, w.as_str())))
    }

    pub fn failure_count(&self) -> usize {
        self.reports.iter().map(|r| r.failures.len()).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.reports.iter().any(|r| !r.passed())
    }

    pub fn is_success(&self) -> bool {
        !self.has_failures()
    }
}

impl FromIterator<CheckReport> for RunResult {
    fn from_iter<I: IntoIterator<Item = CheckReport>>(iter: I) -> Self {
        Self {
            reports: iter.into_iter().collect(),
        }
    }
}

#[derive(Serialize)]
struct RunDoc<'a> {
    passed: bool,
    failures: Vec<FailureDoc>,
    warnings: Vec<WarningDoc<'a>>,
}

#[derive(Serialize)]
struct FailureDoc {
    check: Check,
    fields: &'static [&'static str],
    kind: &'static str,
    message: String,
    suggestions: Vec<String>,
}

#[derive(Serialize)]
struct WarningDoc<'a> {
    check: Check,
    message: &'a str,
}

// Flattened document: {"passed": bool, "failures": [...], "warnings": [...]}
impl Serialize for RunResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RunDoc {
            passed: self.is_success(),
            failures: self
                .failures()
                .map(|(check, err)| FailureDoc {
                    check,
                    fields: check.fields(),
                    kind: err.kind(),
                    message: err.to_string(),
                    suggestions: err.suggestions(),
                })
                .collect(),
            warnings: self
                .warnings()
                .map(|(check, message)| WarningDoc { check, message })
                .collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunResult {
        vec![
            CheckReport::pass(Check::GitBaseUrl),
            CheckReport::from_result(
                Check::AppVersion,
                Err(ValidationError::InvalidSemver {
                    value: "1.2".into(),
                }),
            ),
            CheckReport {
                check: Check::BaseImage,
                failures: Vec::new(),
                warnings: vec!["Timeout for https://registry/x".into()],
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_result_is_success() {
        let result = RunResult::default();
        assert!(result.is_success());
        assert_eq!(result.failure_count(), 0);
    }

    #[test]
    fn any_failure_flags_the_run() {
        let result = sample();
        assert!(result.has_failures());
        assert_eq!(result.failure_count(), 1);
        assert_eq!(result.failure_messages(), ["Invalid app_version (1.2)"]);
    }

    #[test]
    fn warnings_do_not_fail_the_run() {
        let result: RunResult = vec![CheckReport {
            check: Check::BaseImage,
            failures: Vec::new(),
            warnings: vec!["timeout".into()],
        }]
        .into_iter()
        .collect();
        assert!(result.is_success());
        assert_eq!(result.warnings().count(), 1);
    }

    #[test]
    fn serializes_flat_document() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["passed"], false);
        assert_eq!(value["failures"][0]["check"], "app_version");
        assert_eq!(value["failures"][0]["kind"], "invalid_semver");
        assert_eq!(value["failures"][0]["fields"][0], "app_version");
        assert_eq!(value["warnings"][0]["check"], "base_image");
    }
}
