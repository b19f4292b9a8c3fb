//! HTTP client tests against a mock GROBID service.

use grobid_client::client::GrobidClient;
use grobid_client::error::GrobidError;
use grobid_client::form::{File, Form};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEI_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <teiHeader>
    <fileDesc><titleStmt>
      <title level="a" type="main">A Mocked Document</title>
    </titleStmt></fileDesc>
  </teiHeader>
</TEI>"#;

fn sample_form() -> Form {
    Form::new(
        File::new(b"%PDF-1.4 fake".to_vec())
            .with_file_name("paper.pdf")
            .with_mime_type("application/pdf"),
    )
}

/// Run a blocking client call off the async test runtime.
async fn on_blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("Blocking task should not panic")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_process_fulltext_returns_tei_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/processFulltextDocument"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TEI_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let bytes = on_blocking(move || {
        let client = GrobidClient::new(&base_url)?;
        client.process_fulltext(sample_form())
    })
    .await
    .expect("Request should succeed");

    assert_eq!(String::from_utf8_lossy(&bytes), TEI_BODY);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_article_parses_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/processFulltextDocument"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TEI_BODY))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let article = on_blocking(move || {
        let client = GrobidClient::new(&base_url)?;
        client.fetch_article(sample_form())
    })
    .await
    .expect("Request should succeed");

    assert_eq!(article.title.as_deref(), Some("A Mocked Document"));
    assert!(article.authors.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_service_unavailable_maps_to_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/processFulltextDocument"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let err = on_blocking(move || {
        let client = GrobidClient::new(&base_url)?;
        client.process_fulltext(sample_form())
    })
    .await
    .expect_err("503 should be an error");

    match err {
        GrobidError::Service { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service not available");
        }
        other => panic!("Expected Service error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_no_content_maps_to_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/processFulltextDocument"))
        .respond_with(ResponseTemplate::new(203))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let err = on_blocking(move || {
        let client = GrobidClient::new(&base_url)?;
        client.process_fulltext(sample_form())
    })
    .await
    .expect_err("203 should be an error");

    match err {
        GrobidError::Service { status, .. } => assert_eq!(status, 203),
        other => panic!("Expected Service error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unexpected_status_maps_to_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/processFulltextDocument"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let err = on_blocking(move || {
        let client = GrobidClient::new(&base_url)?;
        client.process_fulltext(sample_form())
    })
    .await
    .expect_err("404 should be an error");

    assert!(matches!(err, GrobidError::Http(_)));
}
