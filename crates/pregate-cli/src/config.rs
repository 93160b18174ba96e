//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PREGATE_<SECTION>__<KEY>`,
//!    e.g. `PREGATE_REGISTRY__TIMEOUT_MS=2000`
//! 3. Config file (`--config FILE`, or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use pregate_adapters::HttpRegistryClient;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Container registry used by the base-image check.
    pub registry: RegistryConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub api_base: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig {
                api_base: HttpRegistryClient::DEFAULT_API_BASE.into(),
                timeout_ms: HttpRegistryClient::DEFAULT_TIMEOUT.as_millis() as u64,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Environment prefix for configuration overrides.
    pub const ENV_PREFIX: &'static str = "PREGATE";

    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        Self::load_from(&path, config_file.is_some())
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("registry.api_base", defaults.registry.api_base)?
            .set_default("registry.timeout_ms", defaults.registry.timeout_ms)?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.pregate.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "pregate", "pregate")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".pregate.toml"))
    }
}
