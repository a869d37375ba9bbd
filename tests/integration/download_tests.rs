//! Page downloads against mock servers

use reqwest::Client;
use web_analyzer::download::{build_download_client, PageDownloader};
use web_analyzer::DownloadError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn downloader() -> PageDownloader {
    PageDownloader::new(
        build_download_client("TestAnalyzer/1.0", std::time::Duration::from_secs(5))
            .expect("Failed to build client"),
    )
}

#[tokio::test]
async fn test_download_returns_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
        .mount(&mock_server)
        .await;

    let body = downloader()
        .download(&format!("{}/page", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, b"<html>hello</html>");
}

#[tokio::test]
async fn test_download_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = downloader()
        .download(&format!("{}/missing", mock_server.uri()))
        .await;

    assert!(matches!(result, Err(DownloadError::NotFound { .. })));
}

#[tokio::test]
async fn test_download_other_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let result = downloader().download(&mock_server.uri()).await;

    match result {
        Err(DownloadError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("Expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_download_non_ok_success_is_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let result = downloader().download(&mock_server.uri()).await;
    assert!(matches!(result, Err(DownloadError::Status { status: 204, .. })));
}

#[tokio::test]
async fn test_download_connection_refused() {
    let result = PageDownloader::new(Client::new())
        .download("http://127.0.0.1:1/")
        .await;

    assert!(matches!(result, Err(DownloadError::Http { .. })));
}

#[tokio::test]
async fn test_download_sends_user_agent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(wiremock::matchers::header("user-agent", "TestAnalyzer/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(downloader().download(&mock_server.uri()).await.is_ok());
}
