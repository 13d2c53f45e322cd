//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for every fetch.
///
/// Creates a `reqwest::Client` configured with:
/// - A total per-request timeout of `timeout_seconds`
/// - The given User-Agent header
///
/// Each resolution may use its own client; clients hold no state that
/// resolution depends on.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(
    timeout_seconds: u64,
    user_agent: &str,
) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}
