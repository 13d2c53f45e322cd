//! Link selection rules for each listing level.

use log::trace;

use crate::config::{ARTIFACTS_SUFFIX, E2E_MARKER, GATHER_EXTRA_SEGMENT};

/// Returns the last non-empty path segment of `href`.
///
/// For an href ending in `/` the second-to-last segment is used instead.
/// Only one trailing slash is skipped; `a//` yields an empty segment.
pub fn last_segment(href: &str) -> &str {
    let mut segments = href.rsplit('/');
    let last = segments.next().unwrap_or_default();
    if last.is_empty() {
        segments.next().unwrap_or_default()
    } else {
        last
    }
}

/// Top level: the link ends with `artifacts/`.
pub fn is_artifacts_link(href: &str) -> bool {
    href.ends_with(ARTIFACTS_SUFFIX)
}

/// Artifacts level: the last segment mentions `e2e`.
pub fn is_e2e_link(href: &str) -> bool {
    last_segment(href).contains(E2E_MARKER)
}

/// E2e level: the last segment is exactly `gather-extra`.
pub fn is_gather_extra_link(href: &str) -> bool {
    last_segment(href) == GATHER_EXTRA_SEGMENT
}

/// First link, in extraction order, that satisfies `predicate`.
///
/// Scans linearly with no cap; later matches are never considered.
pub fn find_first<'a, P>(links: &'a [String], predicate: P) -> Option<&'a str>
where
    P: Fn(&str) -> bool,
{
    links
        .iter()
        .map(String::as_str)
        .inspect(|link| trace!("link: {link} (last segment: {})", last_segment(link)))
        .find(|link| predicate(link))
}
