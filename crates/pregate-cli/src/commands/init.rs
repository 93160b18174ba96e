//! `pregate init`: create a default configuration file.

use std::path::Path;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default pregate configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;
    write_default_config(&AppConfig::config_path(), args.force, &output)
}

fn write_default_config(config_path: &Path, force: bool, output: &OutputManager) -> CliResult<()> {
    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn writes_loadable_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default_config(&path, false, &quiet_output()).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.registry, AppConfig::default().registry);
    }

    #[test]
    fn existing_file_is_kept_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        write_default_config(&path, false, &quiet_output()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_default_config(&path, true, &quiet_output()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[registry]"));
    }
}
