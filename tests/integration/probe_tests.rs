//! Reachability probing against mock servers

use reqwest::Client;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use web_analyzer::probe::{build_probe_client, probe_link, ProbeError, Prober};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An address nothing listens on
const REFUSED_LINK: &str = "http://127.0.0.1:1/";

fn prober(timeout: Duration) -> Prober {
    Prober::new(
        build_probe_client("TestProber/1.0").expect("Failed to build client"),
        timeout,
    )
}

async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_not_found_ok_and_connection_error() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/missing", 404).await;
    mount_status(&mock_server, "/ok", 200).await;

    let links = vec![
        format!("{}/missing", mock_server.uri()),
        format!("{}/ok", mock_server.uri()),
        REFUSED_LINK.to_string(),
    ];

    let count = prober(Duration::from_secs(5))
        .count_inaccessible(&links, &CancellationToken::new())
        .await;

    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_every_inaccessible_status_is_counted() {
    let mock_server = MockServer::start().await;
    let codes = [403, 404, 500, 502, 503, 504];
    for code in codes {
        mount_status(&mock_server, &format!("/{}", code), code).await;
    }

    let links: Vec<String> = codes
        .iter()
        .map(|code| format!("{}/{}", mock_server.uri(), code))
        .collect();

    let count = prober(Duration::from_secs(5))
        .count_inaccessible(&links, &CancellationToken::new())
        .await;

    assert_eq!(count, codes.len());
}

#[tokio::test]
async fn test_other_statuses_are_accessible() {
    let mock_server = MockServer::start().await;
    let codes = [200, 204, 301, 302, 400, 401, 405, 410, 429];
    for code in codes {
        mount_status(&mock_server, &format!("/{}", code), code).await;
    }

    let links: Vec<String> = codes
        .iter()
        .map(|code| format!("{}/{}", mock_server.uri(), code))
        .collect();

    let count = prober(Duration::from_secs(5))
        .count_inaccessible(&links, &CancellationToken::new())
        .await;

    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_redirect_is_judged_by_its_own_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/moved"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/gone", mock_server.uri()).as_str()),
        )
        .mount(&mock_server)
        .await;
    mount_status(&mock_server, "/gone", 404).await;

    let status = probe_link(
        &build_probe_client("TestProber/1.0").unwrap(),
        &format!("{}/moved", mock_server.uri()),
        Duration::from_secs(5),
        &CancellationToken::new(),
    )
    .await
    .expect("A redirect is accessible");

    assert_eq!(status.as_u16(), 301);
}

#[tokio::test]
async fn test_probe_uses_head_requests() {
    let mock_server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&mock_server)
        .await;

    let link = format!("{}/page", mock_server.uri());
    // Duplicates are probed independently
    let links = vec![link.clone(), link];

    let count = prober(Duration::from_secs(5))
        .count_inaccessible(&links, &CancellationToken::new())
        .await;

    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_slow_link_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let result = probe_link(
        &Client::new(),
        &format!("{}/slow", mock_server.uri()),
        Duration::from_millis(200),
        &CancellationToken::new(),
    )
    .await;

    assert!(matches!(result, Err(ProbeError::Timeout(_))));
}

#[tokio::test]
async fn test_cancellation_resolves_pending_probes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let links: Vec<String> = (0..5)
        .map(|i| format!("{}/slow/{}", mock_server.uri(), i))
        .collect();

    let cancel = CancellationToken::new();
    let canceller = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            cancel.cancel();
        })
    };

    let started = Instant::now();
    let count = prober(Duration::from_secs(10))
        .count_inaccessible(&links, &cancel)
        .await;
    canceller.await.unwrap();

    assert_eq!(count, links.len());
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_probes_run_concurrently() {
    let mock_server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let links: Vec<String> = (0..10)
        .map(|i| format!("{}/page/{}", mock_server.uri(), i))
        .collect();

    let started = Instant::now();
    let count = prober(Duration::from_secs(5))
        .count_inaccessible(&links, &CancellationToken::new())
        .await;

    assert_eq!(count, 0);
    // Sequential probing would take at least 5 seconds
    assert!(started.elapsed() < Duration::from_secs(3));
}
