//! Data model shared by the resolver, the validator and callers.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Report page of a CI job run, as shown by the CI viewer.
///
/// Opaque and immutable; only its textual prefix is ever rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLocation(String);

impl ReportLocation {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReportLocation {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl std::fmt::Display for ReportLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `started.json` / `finished.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProwJson {
    pub timestamp: i64,
}

/// Start and finish instants of a job run.
///
/// `started <= finished` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunWindow {
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
}

impl RunWindow {
    /// Time between start and finish; negative if the documents disagree.
    pub fn duration(&self) -> Duration {
        self.finished - self.started
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArchive {
    pub window: RunWindow,
    pub archive_url: Url,
}
