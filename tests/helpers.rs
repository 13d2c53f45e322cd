// Shared test helpers for mocking a job's artifact listing.
//
// The mock server plays all three hosts: the viewer under /view, the listing
// host at the root (bucket contents under /gcs) and public storage under /storage.

use prow_metrics::{HostPrefixes, ReportLocation};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const JOB: &str = "/gcs/origin-ci-test/logs/release-openshift-e2e-aws/42";
pub const STARTED: i64 = 1_600_000_000;
pub const FINISHED: i64 = 1_600_005_400;

#[allow(dead_code)] // Used by other test files
pub fn job_path(rest: &str) -> String {
    format!("{JOB}/{rest}")
}

#[allow(dead_code)] // Used by other test files
pub fn hosts(server: &MockServer) -> HostPrefixes {
    let uri = server.uri();
    HostPrefixes::new(format!("{uri}/view"), uri.clone(), format!("{uri}/storage"))
}

#[allow(dead_code)] // Used by other test files
pub fn report(server: &MockServer) -> ReportLocation {
    ReportLocation::new(format!("{}/view{}", server.uri(), JOB))
}

#[allow(dead_code)] // Used by other test files
pub fn client() -> reqwest::Client {
    prow_metrics::initialization::init_client(5, "prow_metrics_test/1.0")
        .expect("Failed to build test client")
}

/// Renders a listing page shaped like gcsweb's, one anchor per link.
pub fn listing_page(links: &[String]) -> String {
    let rows: String = links
        .iter()
        .map(|l| format!("<li class=\"grid-row\"><a href=\"{l}\"><img src=\"/icons/dir.png\">{l}</a></li>\n"))
        .collect();
    format!(
        "<!doctype html><html><head><title>listing</title></head>\
         <body><ul class=\"resource-grid\">\n{rows}</ul></body></html>"
    )
}

#[allow(dead_code)] // Used by other test files
pub async fn mount_json(server: &MockServer, at: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

#[allow(dead_code)] // Used by other test files
pub async fn mount_timestamps(server: &MockServer) {
    mount_json(
        server,
        &job_path("started.json"),
        &format!(r#"{{"timestamp":{STARTED},"pull":"1234"}}"#),
    )
    .await;
    mount_json(
        server,
        &job_path("finished.json"),
        &format!(r#"{{"timestamp":{FINISHED},"passed":true,"result":"SUCCESS"}}"#),
    )
    .await;
}

/// Mounts a listing page and returns the mock so callers can set expectations.
#[allow(dead_code)] // Used by other test files
pub fn listing_mock(at: &str, links: &[String]) -> Mock {
    Mock::given(method("GET")).and(path(at)).respond_with(
        ResponseTemplate::new(200)
            .insert_header("content-type", "text/html; charset=utf-8")
            .set_body_string(listing_page(links)),
    )
}

#[allow(dead_code)] // Used by other test files
pub async fn mount_listing(server: &MockServer, at: &str, links: &[String]) {
    listing_mock(at, links).mount(server).await;
}

/// Mounts a complete job: timestamps and the three listing levels.
///
/// With `gather_extra`, the e2e folder also links to a `gather-extra/` folder.
#[allow(dead_code)] // Used by other test files
pub async fn mount_job(server: &MockServer, gather_extra: bool) {
    mount_timestamps(server).await;

    mount_listing(
        server,
        JOB,
        &[
            "/gcs/origin-ci-test/logs/release-openshift-e2e-aws/".to_string(),
            job_path("artifacts/"),
            job_path("build-log.txt"),
            job_path("finished.json"),
            job_path("started.json"),
        ],
    )
    .await;

    mount_listing(
        server,
        &job_path("artifacts/"),
        &[
            format!("{JOB}/"),
            job_path("artifacts/build-resources/"),
            job_path("artifacts/e2e-aws/"),
            job_path("artifacts/release-latest/"),
        ],
    )
    .await;

    let mut e2e_links = vec![
        job_path("artifacts/"),
        job_path("artifacts/e2e-aws/container-logs/"),
        job_path("artifacts/e2e-aws/junit/"),
    ];
    if gather_extra {
        e2e_links.push(job_path("artifacts/e2e-aws/gather-extra/"));
    }
    mount_listing(server, &job_path("artifacts/e2e-aws/"), &e2e_links).await;
}

/// Storage path of the archive for the layout mounted by [`mount_job`].
#[allow(dead_code)] // Used by other test files
pub fn archive_path(gather_extra: bool) -> String {
    let folder = if gather_extra {
        "artifacts/e2e-aws/gather-extra/"
    } else {
        "artifacts/e2e-aws/"
    };
    format!(
        "/storage/origin-ci-test/logs/release-openshift-e2e-aws/42/{folder}metrics/prometheus.tar"
    )
}
