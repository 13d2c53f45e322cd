//! Configuration constants.
//!
//! This module defines the fixed names and limits used while walking a job's
//! artifact listing. Host prefixes are deliberately absent: they are required
//! configuration (see [`crate::config::HostPrefixes`]).

/// Per-request timeout in seconds.
///
/// Applied to every listing, JSON and HEAD request. A timeout surfaces as an
/// ordinary fetch error.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("prow_metrics/", env!("CARGO_PKG_VERSION"));

// Job metadata documents, relative to the job's listing URL
pub const STARTED_JSON: &str = "started.json";
pub const FINISHED_JSON: &str = "finished.json";

// Listing selection rules
/// Suffix identifying the top-level artifacts folder link.
pub const ARTIFACTS_SUFFIX: &str = "artifacts/";
/// Substring marking an end-to-end test folder in its last path segment.
pub const E2E_MARKER: &str = "e2e";
/// Exact last path segment of the folder new-style jobs keep metrics in.
pub const GATHER_EXTRA_SEGMENT: &str = "gather-extra";

/// Archive location relative to the (possibly adjusted) e2e folder.
pub const PROMETHEUS_TAR_PATH: &str = "metrics/prometheus.tar";

/// Path segment under which the listing host serves bucket contents.
///
/// `<listing prefix>/gcs` is what gets rewritten to the storage prefix.
pub const LISTING_BUCKET_PATH: &str = "/gcs";

// App label generation
pub const APP_LABEL_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const APP_LABEL_LENGTH: usize = 8;
