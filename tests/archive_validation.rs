//! Integration tests for the metadata-only archive check.

mod helpers;

use helpers::*;
use prow_metrics::{validate_archive, ArchiveError, ErrorKind};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARCHIVE: &str = "/storage/bucket/logs/job/1/artifacts/e2e-aws/metrics/prometheus.tar";

fn archive_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}{}", server.uri(), ARCHIVE)).expect("valid test url")
}

#[tokio::test]
async fn test_validate_archive_ok() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path(ARCHIVE))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-length", "2048")
                .set_body_bytes(vec![0u8; 2048]),
        )
        .expect(1)
        .mount(&server)
        .await;
    // The body must never be downloaded
    Mock::given(method("GET"))
        .and(path(ARCHIVE))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let length = validate_archive(&client(), &archive_url(&server))
        .await
        .expect("archive should validate");

    assert_eq!(length, 2048);
}

#[tokio::test]
async fn test_validate_archive_empty() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path(ARCHIVE))
        .respond_with(ResponseTemplate::new(200).insert_header("content-length", "0"))
        .mount(&server)
        .await;

    let url = archive_url(&server);
    let err = validate_archive(&client(), &url).await.unwrap_err();

    assert!(matches!(err, ArchiveError::Empty { .. }));
    assert_eq!(err.url(), url.as_str());
    assert!(err.to_string().ends_with("archive is empty"));
}

#[tokio::test]
async fn test_validate_archive_not_found() {
    let server = MockServer::start().await;

    let err = validate_archive(&client(), &archive_url(&server))
        .await
        .unwrap_err();

    match &err {
        ArchiveError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.kind(), ErrorKind::Fetch);
}

#[tokio::test]
async fn test_validate_archive_unreachable() {
    let url = Url::parse("http://127.0.0.1:9/prometheus.tar").expect("valid test url");
    let err = validate_archive(&client(), &url).await.unwrap_err();
    assert!(matches!(err, ArchiveError::Request { .. }));
}
