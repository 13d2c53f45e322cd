//! Host prefix rewriting.
//!
//! Every URL the resolver produces comes out of one of three textual rules:
//! - viewer prefix -> listing prefix (report page to job listing)
//! - listing prefix + href (listing link to absolute listing URL)
//! - listing prefix + `/gcs` -> storage prefix (listing URL to public archive URL)
//!
//! Each result must parse as an absolute URL.

use url::Url;

use crate::config::{HostPrefixes, LISTING_BUCKET_PATH};
use crate::error_handling::ResolveError;

/// Replaces every occurrence of `from` with `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRewrite {
    from: String,
    to: String,
}

impl PrefixRewrite {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Rewrites `input`. An empty `from` leaves the input untouched.
    pub fn apply(&self, input: &str) -> String {
        if self.from.is_empty() {
            return input.to_string();
        }
        input.replace(&self.from, &self.to)
    }

    /// Rewrites `input` and parses the result as an absolute URL.
    ///
    /// `what` names the URL in the error message.
    pub fn apply_parsed(&self, input: &str, what: &'static str) -> Result<Url, ResolveError> {
        parse_absolute(self.apply(input), what)
    }
}

/// The rewrite rules for one set of [`HostPrefixes`].
#[derive(Debug, Clone)]
pub struct HostRewrites {
    report_to_listing: PrefixRewrite,
    listing_to_storage: PrefixRewrite,
    listing_prefix: String,
}

impl HostRewrites {
    pub fn new(hosts: &HostPrefixes) -> Self {
        Self {
            report_to_listing: PrefixRewrite::new(&hosts.viewer, &hosts.listing),
            listing_to_storage: PrefixRewrite::new(
                format!("{}{}", hosts.listing, LISTING_BUCKET_PATH),
                &hosts.storage,
            ),
            listing_prefix: hosts.listing.clone(),
        }
    }

    /// Turns a viewer report URL into the job's listing URL.
    pub fn report_to_listing(&self, report_url: &str) -> Result<Url, ResolveError> {
        self.report_to_listing.apply_parsed(report_url, "listing")
    }

    /// Turns a listing-relative href into an absolute listing URL.
    pub fn join_listing(&self, href: &str, what: &'static str) -> Result<Url, ResolveError> {
        parse_absolute(format!("{}{}", self.listing_prefix, href), what)
    }

    /// Turns a listing URL into its public storage URL.
    pub fn listing_to_storage(&self, listing_url: &str) -> Result<Url, ResolveError> {
        self.listing_to_storage
            .apply_parsed(listing_url, "metrics archive")
    }
}

fn parse_absolute(candidate: String, what: &'static str) -> Result<Url, ResolveError> {
    Url::parse(&candidate).map_err(|source| ResolveError::InvalidUrl {
        what,
        url: candidate,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts() -> HostPrefixes {
        HostPrefixes::new(
            "https://prow.svc.ci.openshift.org/view",
            "https://gcsweb-ci.svc.ci.openshift.org",
            "https://storage.googleapis.com",
        )
    }

    #[test]
    fn test_prefix_rewrite_replaces_all_occurrences() {
        let rule = PrefixRewrite::new("a", "b");
        assert_eq!(rule.apply("a/a/c"), "b/b/c");
    }

    #[test]
    fn test_prefix_rewrite_empty_from_is_noop() {
        let rule = PrefixRewrite::new("", "https://x");
        assert_eq!(rule.apply("https://y/z"), "https://y/z");
    }

    #[test]
    fn test_report_to_listing() {
        let rewrites = HostRewrites::new(&hosts());
        let url = rewrites
            .report_to_listing(
                "https://prow.svc.ci.openshift.org/view/gcs/origin-ci-test/logs/release-e2e/1234",
            )
            .expect("valid url");
        assert_eq!(
            url.as_str(),
            "https://gcsweb-ci.svc.ci.openshift.org/gcs/origin-ci-test/logs/release-e2e/1234"
        );
    }

    #[test]
    fn test_report_without_viewer_prefix_is_kept() {
        let rewrites = HostRewrites::new(&hosts());
        let url = rewrites
            .report_to_listing("https://gcsweb-ci.svc.ci.openshift.org/gcs/b/logs/j/1")
            .expect("valid url");
        assert_eq!(
            url.as_str(),
            "https://gcsweb-ci.svc.ci.openshift.org/gcs/b/logs/j/1"
        );
    }

    #[test]
    fn test_report_rewrite_must_be_absolute() {
        let rewrites = HostRewrites::new(&hosts());
        let err = rewrites.report_to_listing("/view/gcs/b/logs/j/1").unwrap_err();
        match err {
            ResolveError::InvalidUrl { what, url, .. } => {
                assert_eq!(what, "listing");
                assert_eq!(url, "/view/gcs/b/logs/j/1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_join_listing() {
        let rewrites = HostRewrites::new(&hosts());
        let url = rewrites
            .join_listing("/gcs/b/logs/j/1/artifacts/", "artifacts link")
            .expect("valid url");
        assert_eq!(
            url.as_str(),
            "https://gcsweb-ci.svc.ci.openshift.org/gcs/b/logs/j/1/artifacts/"
        );
    }

    #[test]
    fn test_join_listing_invalid_result() {
        // A relative href runs straight into the port
        let hosts = HostPrefixes::new(
            "https://prow.example.org/view",
            "https://gcsweb.example.org:8080",
            "https://storage.example.org",
        );
        let rewrites = HostRewrites::new(&hosts);
        let err = rewrites
            .join_listing("x y/artifacts/", "artifacts link")
            .unwrap_err();
        match err {
            ResolveError::InvalidUrl { what, url, source } => {
                assert_eq!(what, "artifacts link");
                assert_eq!(url, "https://gcsweb.example.org:8080x y/artifacts/");
                assert_eq!(source, url::ParseError::InvalidPort);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            rewrites
                .join_listing("x y/artifacts/", "artifacts link")
                .unwrap_err()
                .kind(),
            crate::error_handling::ErrorKind::Parse
        );
    }

    #[test]
    fn test_listing_to_storage() {
        let rewrites = HostRewrites::new(&hosts());
        let url = rewrites
            .listing_to_storage(
                "https://gcsweb-ci.svc.ci.openshift.org/gcs/b/logs/j/1/artifacts/e2e-aws/metrics/prometheus.tar",
            )
            .expect("valid url");
        assert_eq!(
            url.as_str(),
            "https://storage.googleapis.com/b/logs/j/1/artifacts/e2e-aws/metrics/prometheus.tar"
        );
    }

    #[test]
    fn test_listing_to_storage_invalid_result() {
        let hosts = HostPrefixes::new(
            "https://prow.example.org/view",
            "https://gcsweb.example.org",
            "not-a-host",
        );
        let rewrites = HostRewrites::new(&hosts);
        let err = rewrites
            .listing_to_storage("https://gcsweb.example.org/gcs/b/metrics/prometheus.tar")
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidUrl {
                what: "metrics archive",
                ..
            }
        ));
    }
}
