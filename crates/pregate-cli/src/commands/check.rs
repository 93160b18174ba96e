//! Implementation of the `pregate check` command.
//!
//! Responsibility: turn CLI arguments (and an optional parameter file) into
//! [`GenerationParams`], run the core pipeline, and report the outcome.
//! No field rules live here.

use std::time::Duration;

use tracing::{debug, info, instrument};

use pregate_adapters::{HttpRegistryClient, load_params};
use pregate_core::{
    application::Pipeline,
    domain::{GenerationParams, ParamsInput, RunResult},
};

use crate::{
    cli::CheckArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `pregate check` command.
///
/// Dispatch sequence:
/// 1. Merge parameter file and flags, then resolve `GenerationParams`
/// 2. Build the registry client from config + overrides
/// 3. Run every check
/// 4. Report; any failure becomes [`CliError::ValidationFailed`] (exit 1)
#[instrument(skip_all)]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let registry = build_registry(&args, &config)?;
    let params = build_params(args)?;

    debug!(
        project = %params.project_name,
        repo = %params.repo_name,
        app = %params.app_name,
        format = ?output.format(),
        "Parameters resolved"
    );

    let result = Pipeline::new(Box::new(registry)).run(&params);

    report(&result, &output)
}

/// Outcome reporter: print the summary, then map it to success / abort.
fn report(result: &RunResult, output: &OutputManager) -> CliResult<()> {
    output.report(result)?;

    if result.has_failures() {
        return Err(CliError::ValidationFailed {
            count: result.failure_count(),
        });
    }

    info!("All checks passed");
    Ok(())
}

// ── Parameter resolution ──────────────────────────────────────────────────────

/// Flags (and their env fallbacks) override the parameter file field by field.
///
/// A value supplied anywhere is kept as given, even when empty; only names
/// nobody supplied are derived from the project name.
fn build_params(args: CheckArgs) -> CliResult<GenerationParams> {
    let file = match &args.params {
        Some(path) => load_params(path)?,
        None => ParamsInput::default(),
    };

    let flags = ParamsInput {
        git_base_url: args.git_base_url,
        project_name: args.project_name,
        repo_name: args.repo_name,
        app_name: args.app_name,
        author_names: args.author_names,
        author_emails: args.author_emails,
        app_version: args.app_version,
        base_image: args.base_image,
        cpu_tag: args.cpu_tag,
        gpu_tag: args.gpu_tag,
    };

    Ok(flags.or(file).resolve())
}

fn build_registry(args: &CheckArgs, config: &AppConfig) -> CliResult<HttpRegistryClient> {
    let api_base = args
        .registry_url
        .clone()
        .unwrap_or_else(|| config.registry.api_base.clone());
    let timeout_ms = args.timeout_ms.unwrap_or(config.registry.timeout_ms);

    let parsed = url::Url::parse(&api_base).map_err(|e| CliError::InvalidInput {
        message: format!("registry URL '{api_base}' is not a valid URL"),
        source: Some(Box::new(e)),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CliError::InvalidInput {
            message: format!("registry URL '{api_base}' must use http or https"),
            source: None,
        });
    }

    if timeout_ms == 0 {
        return Err(CliError::InvalidInput {
            message: "registry timeout must be greater than zero".into(),
            source: None,
        });
    }

    Ok(HttpRegistryClient::new(
        api_base,
        Duration::from_millis(timeout_ms),
    ))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        fs::write(
            &path,
            "project_name = \"From File\"\napp_version = \"1.0.0\"\n",
        )
        .unwrap();

        let args = CheckArgs {
            params: Some(path),
            app_version: Some("2.0.0".into()),
            ..CheckArgs::default()
        };
        let params = build_params(args).unwrap();

        assert_eq!(params.project_name, "From File");
        assert_eq!(params.app_version, "2.0.0");
    }

    #[test]
    fn derived_names_fill_gaps() {
        let args = CheckArgs {
            project_name: Some("My Project".into()),
            ..CheckArgs::default()
        };
        let params = build_params(args).unwrap();

        assert_eq!(params.repo_name, "my-project");
        assert_eq!(params.app_name, "my_project");
    }

    #[test]
    fn empty_flag_is_not_replaced_by_derivation() {
        let args = CheckArgs {
            project_name: Some("My Project".into()),
            repo_name: Some(String::new()),
            ..CheckArgs::default()
        };
        let params = build_params(args).unwrap();

        assert_eq!(params.repo_name, "");
        assert_eq!(params.app_name, "my_project");
    }

    #[test]
    fn file_names_win_over_derivation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.json");
        fs::write(
            &path,
            r#"{"cookiecutter": {"project_name": "Demo App", "__repo_name": "demo"}}"#,
        )
        .unwrap();

        let args = CheckArgs {
            params: Some(path),
            ..CheckArgs::default()
        };
        let params = build_params(args).unwrap();

        assert_eq!(params.repo_name, "demo");
        assert_eq!(params.app_name, "demo_app");
    }

    #[test]
    fn unreadable_params_file_is_user_error() {
        let args = CheckArgs {
            params: Some("/definitely/not/here.toml".into()),
            ..CheckArgs::default()
        };
        let err = build_params(args).unwrap_err();
        assert!(matches!(err, CliError::ParamsFile(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn registry_overrides_config() {
        let args = CheckArgs {
            registry_url: Some("http://localhost:5000/v2".into()),
            timeout_ms: Some(250),
            ..CheckArgs::default()
        };
        let client = build_registry(&args, &AppConfig::default()).unwrap();

        assert_eq!(client.api_base(), "http://localhost:5000/v2");
        assert_eq!(client.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn registry_defaults_from_config() {
        let client = build_registry(&CheckArgs::default(), &AppConfig::default()).unwrap();
        assert_eq!(client.api_base(), "https://registry.hub.docker.com/v2");
    }

    #[test]
    fn malformed_registry_url_is_rejected() {
        for url in ["registry.local/v2", "ftp://registry.local/v2"] {
            let args = CheckArgs {
                registry_url: Some(url.into()),
                ..CheckArgs::default()
            };
            assert!(matches!(
                build_registry(&args, &AppConfig::default()),
                Err(CliError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let args = CheckArgs {
            timeout_ms: Some(0),
            ..CheckArgs::default()
        };
        assert!(matches!(
            build_registry(&args, &AppConfig::default()),
            Err(CliError::InvalidInput { .. })
        ));
    }
}
