//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, listing selection rules, etc.)
//! - Host prefix configuration
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, HostPrefixes, LogFormat, LogLevel, OutputFormat};
