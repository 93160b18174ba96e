//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;

use pregate_core::domain::RunResult;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Flag wins, then `output.format` from config, then TTY detection.
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
        } else {
            args.output_format
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Summary of a validation run.
    ///
    /// JSON mode writes one document and nothing else, even in quiet mode,
    /// so the output stays parseable.
    pub fn report(&self, result: &RunResult) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            let doc = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
            return self.term.write_line(&doc);
        }

        for (check, failure) in result.failures() {
            self.error(&format!("[{check}] {failure}"))?;
        }
        for (check, warning) in result.warnings() {
            self.warning(&format!("[{check}] {warning}"))?;
        }

        if result.is_success() {
            self.success(&format!(
                "All {} checks passed, safe to generate",
                result.reports().len()
            ))
        } else {
            self.error(&format!(
                "Generation aborted: {} validation error(s)",
                result.failure_count()
            ))
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use pregate_core::domain::{Check, CheckReport, ValidationError};

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool, output_format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn failed_run() -> RunResult {
        vec![CheckReport::from_result(
            Check::AppVersion,
            Err(ValidationError::InvalidSemver {
                value: "1.2".into(),
            }),
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        // write_line on Term::stdout() in tests is harmless; we just verify
        // the method returns Ok without panicking.
        assert!(out.print("hello").is_ok());
        assert!(out.quiet);
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn color_only_for_human_format() {
        assert!(!make_manager(false, false, OutputFormat::Human).no_color);
        assert!(make_manager(false, true, OutputFormat::Human).no_color);
        assert!(make_manager(false, false, OutputFormat::Plain).no_color);
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(
            make_manager(false, false, OutputFormat::Json).format(),
            OutputFormat::Json
        );
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        };
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);
    }

    #[test]
    fn report_writes_in_every_format() {
        for format in [OutputFormat::Plain, OutputFormat::Json] {
            let out = make_manager(false, true, format);
            assert!(out.report(&failed_run()).is_ok());
            assert!(out.report(&RunResult::default()).is_ok());
        }
    }
}
