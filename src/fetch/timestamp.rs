//! Timestamps from `started.json` / `finished.json`.

use chrono::{DateTime, Utc};
use log::debug;
use url::Url;

use crate::error_handling::{FetchError, TimestampError};
use crate::models::ProwJson;

/// Fetches a `{ "timestamp": <int> }` document and returns its instant.
///
/// The integer is read as seconds since the Unix epoch, UTC. No fallback
/// value is ever substituted.
///
/// # Errors
///
/// Each failing stage has its own `TimestampError` variant: URL parsing,
/// fetching (including reading the body), JSON decoding, and a timestamp
/// outside the representable range.
pub async fn fetch_timestamp(
    client: &reqwest::Client,
    json_url: &str,
) -> Result<DateTime<Utc>, TimestampError> {
    let url = Url::parse(json_url).map_err(|source| TimestampError::InvalidUrl {
        url: json_url.to_string(),
        source,
    })?;

    let response = super::get(client, url.as_str()).await?;
    let body = response.bytes().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;

    let instant = parse_timestamp(url.as_str(), &body)?;
    debug!("Timestamp at {url}: {instant}");
    Ok(instant)
}

pub(crate) fn parse_timestamp(url: &str, body: &[u8]) -> Result<DateTime<Utc>, TimestampError> {
    let doc: ProwJson = serde_json::from_slice(body).map_err(|source| TimestampError::Decode {
        url: url.to_string(),
        source,
    })?;

    DateTime::from_timestamp(doc.timestamp, 0).ok_or(TimestampError::OutOfRange {
        url: url.to_string(),
        timestamp: doc.timestamp,
    })
}
