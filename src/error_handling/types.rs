//! Error type definitions.
//!
//! This module defines all error types used throughout the library. Every error
//! that concerns a remote resource carries the URL it was processing.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Broad category of a resolution or validation failure.
///
/// All kinds are terminal for the current attempt; none are retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    /// Transport failure, timeout, or non-success status
    Fetch,
    /// Malformed URL after a rewrite, or malformed JSON body
    Parse,
    /// A required link or header is absent from a successful response
    NotFound,
    /// A request succeeded but produced nothing usable
    EmptyResult,
}

/// Which level of the job's directory tree a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ListingLevel {
    #[strum(serialize = "top-level")]
    Top,
    #[strum(serialize = "artifacts")]
    Artifacts,
    #[strum(serialize = "e2e")]
    E2e,
}

/// Link that must be present in a listing for resolution to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RequiredLink {
    #[strum(serialize = "artifacts")]
    Artifacts,
    #[strum(serialize = "e2e")]
    E2e,
}

/// Failure of a single GET request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport error or timeout.
    #[error("Failed to fetch {url}: {source}")]
    Request { url: String, source: ReqwestError },

    /// The server answered with a non-success status.
    #[error("Failed to fetch {url}: returned {status}")]
    Status { url: String, status: StatusCode },

    /// The body could not be read to completion.
    #[error("Failed to read body at {url}: {source}")]
    Body { url: String, source: ReqwestError },
}

/// Failure to obtain a timestamp from a `{ "timestamp": <int> }` document.
#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("Failed to parse JSON URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to decode timestamp JSON at {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("Timestamp {timestamp} at {url} is out of range")]
    OutOfRange { url: String, timestamp: i64 },
}

/// Failure while walking a job's listing down to its metrics archive.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A rewritten or joined URL is not a valid absolute URL.
    #[error("Failed to parse {what} URL {url}: {source}")]
    InvalidUrl {
        what: &'static str,
        url: String,
        source: url::ParseError,
    },

    #[error("Failed to fetch test start time: {0}")]
    StartTime(#[source] TimestampError),

    #[error("Failed to fetch test finished time: {0}")]
    FinishTime(#[source] TimestampError),

    #[error("Failed to fetch {level} listing at {url}: {source}")]
    Listing {
        level: ListingLevel,
        url: String,
        source: FetchError,
    },

    #[error("No {level} links found at {url}")]
    EmptyListing { level: ListingLevel, url: String },

    #[error("Failed to find {target} link in {url} (scanned {} links)", .links.len())]
    LinkNotFound {
        target: RequiredLink,
        url: String,
        links: Vec<String>,
    },
}

/// Failure of the metadata-only check against a resolved archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to fetch {url}: {source}")]
    Request { url: String, source: ReqwestError },

    #[error("Failed to check archive at {url}: returned {status}")]
    Status { url: String, status: StatusCode },

    #[error("Failed to check archive at {url}: no content length returned")]
    MissingContentLength { url: String },

    #[error("Failed to check archive at {url}: invalid content length '{value}'")]
    InvalidContentLength { url: String, value: String },

    #[error("Failed to check archive at {url}: archive is empty")]
    Empty { url: String },
}

/// Any failure of [`crate::fetch_metrics_archive`].
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}
