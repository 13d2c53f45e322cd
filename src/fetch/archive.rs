//! Metadata-only validation of a resolved metrics archive.

use log::{debug, info};
use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use reqwest::StatusCode;
use url::Url;

use crate::error_handling::ArchiveError;

/// Confirms that the archive exists and is non-empty without downloading it.
///
/// Issues a single HEAD request against `archive_url`.
///
/// # Returns
///
/// The archive size in bytes as reported by `content-length`.
///
/// # Errors
///
/// One `ArchiveError` variant per cause, each naming the URL:
/// - `Request`: the request failed or timed out
/// - `Status`: the status is not a success
/// - `MissingContentLength`: no `content-length` header
/// - `InvalidContentLength`: the header is not an integer
/// - `Empty`: the header is exactly zero
pub async fn validate_archive(
    client: &reqwest::Client,
    archive_url: &Url,
) -> Result<u64, ArchiveError> {
    let url = archive_url.as_str();
    debug!("HEAD {url}");
    let response = client
        .head(archive_url.clone())
        .send()
        .await
        .map_err(|source| ArchiveError::Request {
            url: url.to_string(),
            source,
        })?;

    let length = check_content_length(url, response.status(), response.headers())?;
    info!("Archive at {url} is {length} bytes");
    Ok(length)
}

/// Applies the archive checks to a HEAD response's status and headers.
///
/// The header is read directly rather than through the body size hint, which
/// is always zero for HEAD responses.
pub(crate) fn check_content_length(
    url: &str,
    status: StatusCode,
    headers: &HeaderMap,
) -> Result<u64, ArchiveError> {
    if !status.is_success() {
        return Err(ArchiveError::Status {
            url: url.to_string(),
            status,
        });
    }

    let raw = headers
        .get(CONTENT_LENGTH)
        .ok_or_else(|| ArchiveError::MissingContentLength {
            url: url.to_string(),
        })?;

    let invalid = || ArchiveError::InvalidContentLength {
        url: url.to_string(),
        value: String::from_utf8_lossy(raw.as_bytes()).into_owned(),
    };
    let length: u64 = raw
        .to_str()
        .map_err(|_| invalid())?
        .trim()
        .parse()
        .map_err(|_| invalid())?;

    if length == 0 {
        return Err(ArchiveError::Empty {
            url: url.to_string(),
        });
    }
    Ok(length)
}
