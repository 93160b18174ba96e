//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pregate",
    bin_name = "pregate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f6a7} Validate project parameters before scaffolding",
    long_about = "pregate checks the parameters of a templated project \
                  (names, authors, version, base images) and exits non-zero \
                  when generation must not proceed.",
    after_help = "EXAMPLES:\n\
        \x20 pregate check --params cookiecutter.json\n\
        \x20 pregate check --project-name 'My App' --app-version 0.1.0 ...\n\
        \x20 pregate completions bash > /usr/share/bash-completion/completions/pregate",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate generation parameters.
    #[command(
        visible_alias = "c",
        about = "Validate generation parameters",
        after_help = "EXIT CODES:\n\
            \x20 0  all checks passed (unreachable registry lookups are skipped)\n\
            \x20 1  at least one check failed, do not generate\n\
            \x20 2  usage error\n\
            \x20 4  configuration error"
    )]
    Check(Box<CheckArgs>),

    /// Initialise a pregate configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pregate init          # default location\n\
            \x20 pregate init --force  # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pregate completions bash > ~/.local/share/bash-completion/completions/pregate\n\
            \x20 pregate completions zsh  > ~/.zfunc/_pregate\n\
            \x20 pregate completions fish > ~/.config/fish/completions/pregate.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the pregate configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pregate config get registry.api_base\n\
            \x20 pregate config list\n\
            \x20 pregate config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `pregate check`.
///
/// Every field falls back to a `PREGATE_*` environment variable, then to the
/// parameter file given with `--params`.
#[derive(Debug, Default, Args)]
pub struct CheckArgs {
    /// TOML or JSON file holding the parameters.
    #[arg(
        short = 'p',
        long = "params",
        value_name = "FILE",
        env = "PREGATE_PARAMS",
        help = "Parameter file (.toml or .json)"
    )]
    pub params: Option<PathBuf>,

    #[arg(long, value_name = "URL", env = "PREGATE_GIT_BASE_URL", help = "Git base URL")]
    pub git_base_url: Option<String>,

    #[arg(long, value_name = "NAME", env = "PREGATE_PROJECT_NAME", help = "Project name")]
    pub project_name: Option<String>,

    #[arg(
        long,
        value_name = "NAME",
        env = "PREGATE_REPO_NAME",
        help = "Repository name (derived from the project name if omitted)"
    )]
    pub repo_name: Option<String>,

    #[arg(
        long,
        value_name = "NAME",
        env = "PREGATE_APP_NAME",
        help = "Module name (derived from the project name if omitted)"
    )]
    pub app_name: Option<String>,

    #[arg(
        long,
        visible_alias = "author-name",
        value_name = "NAMES",
        env = "PREGATE_AUTHOR_NAMES",
        help = "Comma-separated author names"
    )]
    pub author_names: Option<String>,

    #[arg(
        long,
        visible_alias = "author-email",
        value_name = "EMAILS",
        env = "PREGATE_AUTHOR_EMAILS",
        help = "Comma-separated author emails"
    )]
    pub author_emails: Option<String>,

    #[arg(long, value_name = "VERSION", env = "PREGATE_APP_VERSION", help = "MAJOR.MINOR.PATCH")]
    pub app_version: Option<String>,

    #[arg(long, value_name = "IMAGE", env = "PREGATE_BASE_IMAGE", help = "Base image repository")]
    pub base_image: Option<String>,

    #[arg(long, value_name = "TAG", env = "PREGATE_CPU_TAG", help = "Base image CPU tag")]
    pub cpu_tag: Option<String>,

    #[arg(long, value_name = "TAG", env = "PREGATE_GPU_TAG", help = "Base image GPU tag")]
    pub gpu_tag: Option<String>,

    /// Override `registry.api_base` from the configuration.
    #[arg(long = "registry-url", value_name = "URL", help = "Registry API base URL")]
    pub registry_url: Option<String>,

    /// Override `registry.timeout_ms` from the configuration.
    #[arg(long = "timeout-ms", value_name = "MS", help = "Registry lookup timeout")]
    pub timeout_ms: Option<u64>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pregate init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pregate completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pregate config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `registry.timeout_ms`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
