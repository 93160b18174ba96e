//! Flags shared by every `pregate` subcommand.
//!
//! Flattened into [`super::Cli`]. They control how much the gate says and
//! where it reads its registry settings from, never what it validates.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Validation errors and registry warnings
    -v      - Info level (progress messages)
    -vv     - Debug level (every check and lookup)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Print only failed checks.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only failed checks and errors"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Gate configuration (registry endpoint, timeout, output defaults).
    ///
    /// Must exist when given; without it the platform default is read if
    /// present.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read registry and output settings from FILE"
    )]
    pub config: Option<PathBuf>,

    /// How the check summary is rendered.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Summary format (json prints one report document)"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of the check summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise (or `output.format` from config).
    #[default]
    Auto,
    /// One colored line per failed check, then a verdict.
    Human,
    /// Same lines without ANSI codes, for hook logs.
    Plain,
    /// `{passed, failures, warnings}` on stdout.
    Json,
}
