use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use profilesleuth_core::config::{self, DEFAULT_MIN_SIZE_MB};
use profilesleuth_core::report::{OutputFormat, TextOptions, DEFAULT_TOP_EXTENSIONS};
use profilesleuth_core::{CoreResult, ScanConfig};

#[derive(Debug, Parser)]
#[command(
    name = "profilesleuth",
    version,
    about = "List Chrome profiles and extension sizes with optional JSON/CSV export"
)]
pub struct Cli {
    #[arg(
        long,
        visible_alias = "chrome-data-dir",
        value_name = "DIR",
        help = "Chrome user data directory (defaults to the platform location)"
    )]
    pub root: Option<PathBuf>,
    #[arg(
        long,
        value_name = "MB",
        default_value_t = DEFAULT_MIN_SIZE_MB,
        value_parser = parse_threshold,
        help = "Hide profiles and extensions smaller than this many MB"
    )]
    pub min_size_mb: f64,
    #[arg(long, conflicts_with = "csv", help = "Emit JSON output")]
    pub json: bool,
    #[arg(long, help = "Emit CSV output")]
    pub csv: bool,
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_TOP_EXTENSIONS,
        help = "Largest extensions to list in the text summary"
    )]
    pub top: usize,
    #[arg(long, help = "Disable coloured sizes in text output")]
    pub no_color: bool,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging (repeatable)")]
    pub verbose: u8,
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, help = "Log level")]
    pub log_level: LogLevel,
    #[arg(long, help = "Enable debug logging (overrides --log-level)")]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl Cli {
    /// Effective log level: `--debug`, else the more verbose of `--log-level`
    /// and the `-v` count.
    pub fn log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        let from_verbose = match self.verbose {
            0 => LogLevel::Error,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        self.log_level.max(from_verbose)
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_flags(self.json, self.csv)
    }

    pub fn text_options(&self) -> TextOptions {
        TextOptions {
            color: !self.no_color,
            top: self.top,
        }
    }

    pub fn scan_config(&self) -> CoreResult<ScanConfig> {
        let root_dir = self.root.clone().unwrap_or_else(config::default_root_dir);
        ScanConfig::new(root_dir, self.min_size_mb)
    }
}

fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    config::validate_threshold(value).map_err(|err| err.to_string())
}
