//! Pipeline - runs every check and folds the outcomes.
//!
//! The workflow is fixed:
//! 1. Run each check in [`Check::ALL`] order, unconditionally
//! 2. Log each failure / warning the moment it is found
//! 3. Collect the per-check reports into an immutable [`RunResult`]
//!
//! A failing check never stops the next one. Deciding what the aggregate
//! means for the process is left to the caller.

use tracing::{debug, error, info, instrument, warn};

use crate::{
    application::ports::{RegistryClient, TagLookup},
    domain::{
        Check, CheckReport, GenerationParams, RunResult, ValidationError,
        rules::{
            validate_app_name, validate_app_version, validate_authors, validate_git_base_url,
            validate_project_name, validate_repo_name,
        },
    },
};

/// The validation pipeline.
pub struct Pipeline {
    registry: Box<dyn RegistryClient>,
}

impl Pipeline {
    /// Create a pipeline that looks up base images through `registry`.
    pub fn new(registry: Box<dyn RegistryClient>) -> Self {
        Self { registry }
    }

    /// Run every check against `params`.
    #[instrument(skip_all, fields(project = %params.project_name))]
    pub fn run(&self, params: &GenerationParams) -> RunResult {
        info!("Validating generation parameters");

        let result: RunResult = Check::ALL
            .into_iter()
            .map(|check| {
                if check.is_remote() {
                    debug!(%check, "Contacting registry");
                }
                let report = self.run_check(check, params);
                log_report(&report);
                report
            })
            .collect();

        info!(
            failures = result.failure_count(),
            warnings = result.warnings().count(),
            "Validation finished"
        );
        result
    }

    /// Run a single check.
    pub fn run_check(&self, check: Check, params: &GenerationParams) -> CheckReport {
        match check {
            Check::GitBaseUrl => {
                CheckReport::from_result(check, validate_git_base_url(&params.git_base_url))
            }
            Check::ProjectName => {
                CheckReport::from_result(check, validate_project_name(&params.project_name))
            }
            Check::RepoName => {
                CheckReport::from_result(check, validate_repo_name(&params.repo_name))
            }
            Check::AppName => CheckReport::from_result(check, validate_app_name(&params.app_name)),
            Check::Authors => CheckReport {
                check,
                failures: validate_authors(&params.author_names, &params.author_emails),
                warnings: Vec::new(),
            },
            Check::AppVersion => {
                CheckReport::from_result(check, validate_app_version(&params.app_version))
            }
            Check::BaseImage => self.check_base_image(params),
        }
    }

    /// Look up the CPU tag, then the GPU tag.
    ///
    /// `Unknown` lookups pass with a warning; the registry not answering is
    /// not evidence that the image is missing.
    fn check_base_image(&self, params: &GenerationParams) -> CheckReport {
        let mut report = CheckReport::pass(Check::BaseImage);

        for tag in [&params.cpu_tag, &params.gpu_tag] {
            match self.registry.lookup_tag(&params.base_image, tag) {
                TagLookup::Exists => {
                    debug!(image = %params.base_image, tag = %tag, "Image tag found");
                }
                TagLookup::NotFound { status } => {
                    report.failures.push(ValidationError::ImageNotFound {
                        image: params.base_image.clone(),
                        tag: tag.clone(),
                        status,
                    });
                }
                TagLookup::Unknown { reason } => {
                    let url = self.registry.tag_url(&params.base_image, tag);
                    report
                        .warnings
                        .push(format!("Registry lookup skipped for {url}: {reason}"));
                }
            }
        }

        report
    }
}

fn log_report(report: &CheckReport) {
    for failure in &report.failures {
        error!(check = %report.check, "{failure}");
    }
    for warning in &report.warnings {
        warn!(check = %report.check, "{warning}");
    }
    if report.passed() {
        debug!(check = %report.check, "Check passed");
    }
}
