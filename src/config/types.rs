//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{DEFAULT_USER_AGENT, HTTP_TIMEOUT_SECS};

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
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the final result printed by the binary.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per field
    Plain,
    /// A single JSON object
    Json,
}

/// Validation failure for a single configuration field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is expected instead
    pub message: String,
}

/// The three host prefixes that drive every URL rewrite during resolution.
///
/// - `viewer`: prefix of the CI viewer's report pages
///   (e.g. `https://prow.svc.ci.openshift.org/view`)
/// - `listing`: prefix of the static object-listing host
///   (e.g. `https://gcsweb-ci.svc.ci.openshift.org`)
/// - `storage`: prefix of the public artifact-storage host
///   (e.g. `https://storage.googleapis.com`)
///
/// None of these have defaults. Trailing slashes are trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPrefixes {
    pub viewer: String,
    pub listing: String,
    pub storage: String,
}

impl HostPrefixes {
    pub fn new(
        viewer: impl Into<String>,
        listing: impl Into<String>,
        storage: impl Into<String>,
    ) -> Self {
        fn trim(s: String) -> String {
            s.trim_end_matches('/').to_string()
        }
        Self {
            viewer: trim(viewer.into()),
            listing: trim(listing.into()),
            storage: trim(storage.into()),
        }
    }
}

/// Configuration for a single resolution run.
///
/// Parsed from the command line by the binary, but can be constructed
/// programmatically as well.
///
/// # Examples
///
/// ```no_run
/// use prow_metrics::Config;
///
/// let config = Config {
///     report_url: "https://prow.example.org/view/gcs/bucket/logs/job/1".to_string(),
///     viewer_prefix: "https://prow.example.org/view".to_string(),
///     listing_prefix: "https://gcsweb.example.org".to_string(),
///     storage_prefix: "https://storage.example.org".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "prow-metrics",
    version,
    about = "Locate and validate the Prometheus archive of a Prow job run"
)]
pub struct Config {
    /// Report URL of the CI job run (viewer page)
    pub report_url: String,

    /// Prefix of the CI viewer host, rewritten to the listing prefix
    #[arg(long, env = "PROW_VIEWER_PREFIX")]
    pub viewer_prefix: String,

    /// Prefix of the object-listing host
    #[arg(long, env = "GCS_LISTING_PREFIX")]
    pub listing_prefix: String,

    /// Prefix of the public artifact-storage host
    #[arg(long, env = "ARTIFACT_STORAGE_PREFIX")]
    pub storage_prefix: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Result output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Only resolve the archive URL, do not check it with a HEAD request
    #[arg(long)]
    pub skip_validation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_url: String::new(),
            viewer_prefix: String::new(),
            listing_prefix: String::new(),
            storage_prefix: String::new(),
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
            skip_validation: false,
        }
    }
}

impl Config {
    /// Checks that every required field is usable.
    ///
    /// Host prefixes must be absolute `http`/`https` URLs; an empty prefix is
    /// rejected rather than replaced by a default.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigValidationError`] found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("viewer_prefix", &self.viewer_prefix),
            ("listing_prefix", &self.listing_prefix),
            ("storage_prefix", &self.storage_prefix),
        ] {
            validate_prefix(field, value)?;
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Builds the [`HostPrefixes`] used by the resolver.
    pub fn host_prefixes(&self) -> HostPrefixes {
        HostPrefixes::new(
            self.viewer_prefix.clone(),
            self.listing_prefix.clone(),
            self.storage_prefix.clone(),
        )
    }
}

fn validate_prefix(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    if value.trim().is_empty() {
        return Err(ConfigValidationError {
            field,
            message: "is required (no default is provided)".to_string(),
        });
    }
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(ConfigValidationError {
            field,
            message: format!("unsupported scheme '{}', expected http or https", parsed.scheme()),
        }),
        Err(e) => Err(ConfigValidationError {
            field,
            message: format!("'{value}' is not an absolute URL: {e}"),
        }),
    }
}
