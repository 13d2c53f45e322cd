//! Error categorization.
//!
//! Maps every concrete error onto one [`ErrorKind`] so callers can decide how
//! to present a failure (or whether to retry the whole attempt) without
//! matching on individual variants.

use super::types::{
    ArchiveError, ErrorKind, FetchError, MetricsError, ResolveError, TimestampError,
};

impl FetchError {
    /// Every GET failure is a fetch error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Fetch
    }

    /// URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. } => url,
        }
    }
}

impl TimestampError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TimestampError::Fetch(e) => e.kind(),
            TimestampError::InvalidUrl { .. }
            | TimestampError::Decode { .. }
            | TimestampError::OutOfRange { .. } => ErrorKind::Parse,
        }
    }
}

impl ResolveError {
    /// Categorizes a resolution failure.
    ///
    /// Timestamp failures inherit the kind of the underlying error, so an
    /// unreachable `started.json` is a fetch error while a malformed one is a
    /// parse error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::InvalidUrl { .. } => ErrorKind::Parse,
            ResolveError::StartTime(e) | ResolveError::FinishTime(e) => e.kind(),
            ResolveError::Listing { source, .. } => source.kind(),
            ResolveError::EmptyListing { .. } => ErrorKind::EmptyResult,
            ResolveError::LinkNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

impl ArchiveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArchiveError::Request { .. } | ArchiveError::Status { .. } => ErrorKind::Fetch,
            ArchiveError::MissingContentLength { .. } => ErrorKind::NotFound,
            ArchiveError::InvalidContentLength { .. } => ErrorKind::Parse,
            ArchiveError::Empty { .. } => ErrorKind::EmptyResult,
        }
    }

    /// URL of the archive that failed validation.
    pub fn url(&self) -> &str {
        match self {
            ArchiveError::Request { url, .. }
            | ArchiveError::Status { url, .. }
            | ArchiveError::MissingContentLength { url }
            | ArchiveError::InvalidContentLength { url, .. }
            | ArchiveError::Empty { url } => url,
        }
    }
}

impl MetricsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetricsError::Resolve(e) => e.kind(),
            MetricsError::Archive(e) => e.kind(),
        }
    }
}
