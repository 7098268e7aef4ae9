//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use seo_audit::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// assert_eq!(config.timeout_seconds, 5);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Fetch timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Compact report
/// seo_audit https://example.com
///
/// # Full report, indented
/// seo_audit https://example.com/blog/post --full --pretty
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seo_audit",
    about = "Audits a web page's HTML for on-page SEO signals."
)]
pub struct Opt {
    /// Absolute http(s) URL of the page to audit
    pub url: String,

    /// Produce the full report instead of the compact one
    #[arg(long)]
    pub full: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent.clone(),
        }
    }
}
