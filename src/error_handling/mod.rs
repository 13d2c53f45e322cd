//! Error handling.
//!
//! This module provides:
//! - Error type definitions for every fallible stage
//! - Categorization of errors into fetch / parse / not-found / empty-result
//!
//! No error is retried internally; the caller decides whether to run a whole
//! resolution attempt again.

mod categorization;
mod types;

// Re-export public API
pub use types::{
    ArchiveError, ErrorKind, FetchError, InitializationError, ListingLevel, MetricsError,
    RequiredLink, ResolveError, TimestampError,
};
