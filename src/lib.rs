//! prow_metrics library: locate the Prometheus archive of a Prow CI job run
//!
//! Given the report page of a job run, this library walks the job's static
//! artifact listing (top level, `artifacts/`, the e2e test folder and, for
//! new-style jobs, `gather-extra/`) to find `metrics/prometheus.tar`, rewrites
//! it to the public storage host, and checks that the archive is non-empty.
//!
//! # Example
//!
//! ```no_run
//! use prow_metrics::{fetch_metrics_archive, HostPrefixes, LogReporter, ReportLocation};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hosts = HostPrefixes::new(
//!     "https://prow.svc.ci.openshift.org/view",
//!     "https://gcsweb-ci.svc.ci.openshift.org",
//!     "https://storage.googleapis.com",
//! );
//! let client = prow_metrics::initialization::init_client(10, "prow_metrics")?;
//! let report = ReportLocation::new(
//!     "https://prow.svc.ci.openshift.org/view/gcs/origin-ci-test/logs/release-e2e/1234",
//! );
//!
//! let archive = fetch_metrics_archive(&client, &hosts, &report, &LogReporter).await?;
//! println!("{}", archive.archive_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod label;
mod models;
pub mod resolve;
mod status;

// Re-export public API
pub use config::{Config, ConfigValidationError, HostPrefixes, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{
    ArchiveError, ErrorKind, FetchError, InitializationError, ListingLevel, MetricsError,
    RequiredLink, ResolveError, TimestampError,
};
pub use fetch::{extract_links, fetch_timestamp, validate_archive};
pub use label::generate_app_label;
pub use models::{ReportLocation, ResolvedArchive, RunWindow};
pub use resolve::resolve;
pub use status::{
    ChannelReporter, LogReporter, NoopReporter, StatusKind, StatusMessage, StatusReporter,
};

/// Resolves a job's metrics archive and checks that it can be fetched.
///
/// Narrates progress to `reporter` once the archive URL is known and before
/// validating it. Nothing is reported about failures; that is left to the
/// caller, which also decides whether to retry.
///
/// # Arguments
///
/// * `client` - HTTP client (its timeout bounds each request)
/// * `hosts` - Viewer, listing and storage host prefixes
/// * `report` - Report page of the job run
/// * `reporter` - Status sink
///
/// # Errors
///
/// `MetricsError::Resolve` if the archive URL cannot be resolved, or
/// `MetricsError::Archive` if the archive is missing or empty.
pub async fn fetch_metrics_archive<R: StatusReporter + ?Sized>(
    client: &reqwest::Client,
    hosts: &HostPrefixes,
    report: &ReportLocation,
    reporter: &R,
) -> Result<ResolvedArchive, MetricsError> {
    let archive = resolve(client, hosts, report).await?;

    reporter.report(
        StatusKind::Status,
        &format!("Found prometheus archive at {}", archive.archive_url),
    );
    reporter.report(
        StatusKind::Status,
        "Checking if prometheus archive can be fetched",
    );
    validate_archive(client, &archive.archive_url).await?;

    Ok(archive)
}
