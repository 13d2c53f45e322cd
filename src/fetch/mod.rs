//! Remote fetches used during resolution.
//!
//! Each function performs exactly one request through the shared client, whose
//! timeout bounds it. Responses are owned by the function that issued them and
//! dropped on every exit path, which releases the connection.

mod archive;
mod links;
mod timestamp;

use log::debug;

use crate::error_handling::FetchError;

pub use archive::validate_archive;
pub use links::extract_links;
pub use timestamp::fetch_timestamp;

#[cfg(test)]
pub(crate) use archive::check_content_length;
#[cfg(test)]
pub(crate) use links::parse_links;

/// Issues a GET request and rejects non-success statuses.
///
/// # Errors
///
/// Returns `FetchError::Request` for transport failures and timeouts, and
/// `FetchError::Status` when the server answers with a non-2xx status.
async fn get(client: &reqwest::Client, url: &str) -> Result<reqwest::Response, FetchError> {
    debug!("GET {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(response)
}
