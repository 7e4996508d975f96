//! CLI argument definitions for `gradepoint`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradepoint::config::ConfigOverrides;
use gradepoint::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display semesters with SGPA and the cumulative figures.
    ///
    /// With a SEMESTER number, shows only that semester's modules.
    Show {
        /// Semester number (1-8); all semesters when omitted
        #[arg(value_name = "SEMESTER")]
        semester: Option<usize>,
    },
    /// Add a module record to a semester.
    Add {
        /// Semester number (1-8)
        #[arg(value_name = "SEMESTER")]
        semester: usize,

        /// Module name
        #[arg(long, value_name = "NAME", default_value = "")]
        name: String,

        /// Module code
        #[arg(long, value_name = "CODE", default_value = "")]
        code: String,

        /// Credit-hours weight
        #[arg(long, value_name = "CREDIT", default_value_t = 0.0)]
        credit: f64,

        /// Letter grade (e.g., A+, B-, E-)
        #[arg(long, value_name = "GRADE")]
        grade: Option<String>,
    },
    /// Edit a module record in place.
    ///
    /// Only the provided fields change; the credit point recomputes
    /// whenever credit or grade changes.
    Edit {
        /// Semester number (1-8)
        #[arg(value_name = "SEMESTER")]
        semester: usize,

        /// Row index within the semester, starting at 0
        #[arg(value_name = "ROW")]
        row: usize,

        /// New module name
        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        /// New module code
        #[arg(long, value_name = "CODE")]
        code: Option<String>,

        /// New credit-hours weight
        #[arg(long, value_name = "CREDIT")]
        credit: Option<f64>,

        /// New letter grade (empty string clears the grade)
        #[arg(long, value_name = "GRADE")]
        grade: Option<String>,
    },
    /// Remove a module record from a semester.
    Remove {
        /// Semester number (1-8)
        #[arg(value_name = "SEMESTER")]
        semester: usize,

        /// Row index within the semester, starting at 0
        #[arg(value_name = "ROW")]
        row: usize,
    },
    /// Reset one semester, or the whole dataset (requires confirmation).
    Reset {
        /// Semester number (1-8); resets everything when omitted
        #[arg(value_name = "SEMESTER")]
        semester: Option<usize>,
    },
    /// Export the dataset to a CSV file.
    Export {
        /// Output file path; a `.csv` suffix is appended when missing.
        /// Defaults to `gradepoint-data.csv` under the configured exports
        /// directory.
        #[arg(value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Import a dataset from a CSV file, replacing the current data.
    ///
    /// Importing over existing data requires confirmation.
    Import {
        /// Path to a `.csv` file produced by `export`
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Generate a GPA report.
    Report {
        /// Output file path (defaults to `gpa-report.<ext>` under the
        /// configured exports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or text (txt)
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradepoint",
    about = "Gradepoint command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config dataset file path
    #[arg(long = "config-data-file", value_name = "PATH")]
    pub config_data_file: Option<PathBuf>,

    /// Override config dataset file path (short form)
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--data-file`) take precedence over long-form flags (e.g.,
    /// `--config-data-file`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_file: self
                .data_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_file
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            exports_dir: self
                .exports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_exports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_data_file: None,
            data_file: None,
            config_exports_dir: None,
            exports_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = bare_cli(Command::Config { subcommand: None });

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_file.is_none());
        assert!(overrides.exports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.data_file = Some(PathBuf::from("/data/grades.json"));
        cli.exports_dir = Some(PathBuf::from("/exports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_file, Some("/data/grades.json".to_string()));
        assert_eq!(overrides.exports_dir, Some("/exports".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_data_file = Some(PathBuf::from("/long/data.json"));
        cli.data_file = Some(PathBuf::from("/short/data.json"));
        cli.config_exports_dir = Some(PathBuf::from("/long/out"));
        cli.exports_dir = Some(PathBuf::from("/short/out"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_file, Some("/short/data.json".to_string()));
        assert_eq!(overrides.exports_dir, Some("/short/out".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli(Command::Config { subcommand: None });
        cli.config_data_file = Some(PathBuf::from("/long/data.json"));
        cli.config_exports_dir = Some(PathBuf::from("/long/out"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_file, Some("/long/data.json".to_string()));
        assert_eq!(overrides.exports_dir, Some("/long/out".to_string()));
    }
}
