//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_USER_AGENT, GEO_API_BASE_URL,
    OPENAI_API_BASE_URL,
};
use crate::summary::ApiKey;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed once at startup from command-line flags and environment variables
/// (a `.env` file is honoured by the binary), read-only afterwards.
///
/// # Examples
///
/// ```no_run
/// use cyber_scan_x::Config;
///
/// let config = Config {
///     geo_api_url: "http://127.0.0.1:8080/json".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cyber_scan_x",
    version,
    about = "Geolocate IP addresses and get a short written report"
)]
pub struct Config {
    /// Log level
    #[arg(long, value_enum, default_value = "info", env = "CYBER_SCAN_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain", env = "CYBER_SCAN_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Geolocation service base URL (the address is appended as a path segment)
    #[arg(long, default_value = GEO_API_BASE_URL, env = "CYBER_SCAN_GEO_API_URL")]
    pub geo_api_url: String,

    /// Text-generation API base URL
    #[arg(long, default_value = OPENAI_API_BASE_URL, env = "OPENAI_API_BASE")]
    pub openai_api_url: String,

    /// Text-generation API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<ApiKey>,

    /// Model used for report generation
    #[arg(long, default_value = DEFAULT_MODEL, env = "CYBER_SCAN_MODEL")]
    pub model: String,

    /// Sampling temperature used for report generation
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE, env = "CYBER_SCAN_TEMPERATURE")]
    pub temperature: f32,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long, env = "CYBER_SCAN_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            geo_api_url: GEO_API_BASE_URL.to_string(),
            openai_api_url: OPENAI_API_BASE_URL.to_string(),
            openai_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
