//! Directory resolution: from a CI report URL to its metrics archive URL.
//!
//! The job listing is walked level by level:
//!
//! 1. top level: the first link ending in `artifacts/`
//! 2. artifacts: the first link whose last segment contains `e2e`
//! 3. e2e folder: if a `gather-extra` link exists (new-style jobs), it
//!    replaces the e2e folder; otherwise the e2e folder is kept
//!
//! `metrics/prometheus.tar` under the selected folder, rewritten to the public
//! storage host, is the archive URL. At every level the first qualifying link
//! in document order wins.

mod rewrite;
mod segment;

use log::{debug, info};
use url::Url;

use crate::config::{HostPrefixes, FINISHED_JSON, PROMETHEUS_TAR_PATH, STARTED_JSON};
use crate::error_handling::{ListingLevel, RequiredLink, ResolveError};
use crate::fetch::{extract_links, fetch_timestamp};
use crate::models::{ReportLocation, ResolvedArchive, RunWindow};

pub use rewrite::{HostRewrites, PrefixRewrite};
pub use segment::{
    find_first, is_artifacts_link, is_e2e_link, is_gather_extra_link, last_segment,
};

/// Resolves the metrics archive URL for a job's report page.
///
/// Every step depends on the previous one; the first failure aborts the
/// whole resolution and nothing partial is returned. Timestamps are fetched
/// before any listing is read.
///
/// # Arguments
///
/// * `client` - HTTP client (its timeout bounds each request)
/// * `hosts` - Viewer, listing and storage host prefixes
/// * `report` - Report page of the job run
///
/// # Errors
///
/// Returns a `ResolveError` describing the failing stage and URL:
/// - `InvalidUrl` when a rewritten URL does not parse
/// - `StartTime` / `FinishTime` when a timestamp cannot be fetched
/// - `Listing` / `EmptyListing` when a listing fails or has no links
/// - `LinkNotFound` when no artifacts or e2e link qualifies
pub async fn resolve(
    client: &reqwest::Client,
    hosts: &HostPrefixes,
    report: &ReportLocation,
) -> Result<ResolvedArchive, ResolveError> {
    let rewrites = HostRewrites::new(hosts);

    let listing_url = rewrites.report_to_listing(report.as_str())?;
    info!("Resolving {report} via {listing_url}");

    let window = fetch_run_window(client, &listing_url).await?;
    debug!(
        "Run window: {} - {}",
        window.started.to_rfc3339(),
        window.finished.to_rfc3339()
    );

    let top_links = list_level(client, ListingLevel::Top, &listing_url).await?;
    let artifacts_href = find_first(&top_links, is_artifacts_link).ok_or_else(|| {
        ResolveError::LinkNotFound {
            target: RequiredLink::Artifacts,
            url: listing_url.to_string(),
            links: top_links.clone(),
        }
    })?;
    let artifacts_url = rewrites.join_listing(artifacts_href, "artifacts link")?;
    debug!("Artifacts folder: {artifacts_url}");

    let artifact_links = list_level(client, ListingLevel::Artifacts, &artifacts_url).await?;
    let e2e_href = find_first(&artifact_links, is_e2e_link).ok_or_else(|| {
        ResolveError::LinkNotFound {
            target: RequiredLink::E2e,
            url: artifacts_url.to_string(),
            links: artifact_links.clone(),
        }
    })?;
    let mut e2e_url = rewrites.join_listing(e2e_href, "e2e link")?;
    debug!("E2e folder: {e2e_url}");

    // New-style jobs keep metrics one level deeper
    let e2e_links = list_level(client, ListingLevel::E2e, &e2e_url).await?;
    match find_first(&e2e_links, is_gather_extra_link) {
        Some(extra_href) => {
            e2e_url = rewrites.join_listing(extra_href, "gather-extra link")?;
            info!("Using new-style job layout at {e2e_url}");
        }
        None => debug!("No gather-extra folder under {e2e_url}, using legacy layout"),
    }

    let archive_url =
        rewrites.listing_to_storage(&format!("{}{}", e2e_url, PROMETHEUS_TAR_PATH))?;
    info!("Resolved metrics archive: {archive_url}");

    Ok(ResolvedArchive {
        window,
        archive_url,
    })
}

async fn fetch_run_window(
    client: &reqwest::Client,
    listing_url: &Url,
) -> Result<RunWindow, ResolveError> {
    let base = listing_url.as_str().trim_end_matches('/');

    let started = fetch_timestamp(client, &format!("{base}/{STARTED_JSON}"))
        .await
        .map_err(ResolveError::StartTime)?;
    let finished = fetch_timestamp(client, &format!("{base}/{FINISHED_JSON}"))
        .await
        .map_err(ResolveError::FinishTime)?;

    Ok(RunWindow { started, finished })
}

/// Extracts one level's links, treating an empty listing as a failure.
async fn list_level(
    client: &reqwest::Client,
    level: ListingLevel,
    url: &Url,
) -> Result<Vec<String>, ResolveError> {
    let links = extract_links(client, url.as_str())
        .await
        .map_err(|source| ResolveError::Listing {
            level,
            url: url.to_string(),
            source,
        })?;

    if links.is_empty() {
        return Err(ResolveError::EmptyListing {
            level,
            url: url.to_string(),
        });
    }
    Ok(links)
}
