//! End-to-end analyses against mock servers

use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use web_analyzer::probe::build_probe_client;
use web_analyzer::{Analyzer, HtmlVersion, PageDownloader, Prober};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn analyzer(probe_timeout: Duration, deadline: Duration) -> Analyzer {
    let client = build_probe_client("TestAnalyzer/1.0").expect("Failed to build client");
    Analyzer::new(Prober::new(client, probe_timeout), deadline)
}

async fn mount_head(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Page served by `site` linking to itself and to `other`
fn sample_page(site: &MockServer, other: &MockServer) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>  Sample Site  </title></head>
<body>
    <h1>Welcome</h1>
    <h2>News</h2>
    <h2>Contact</h2>
    <form action="/login" method="post">
        <input type="text" name="user">
        <input type="password" name="pass">
    </form>
    <a href="/about">About</a>
    <a href="/broken">Broken</a>
    <a href="{site}/contact">Contact</a>
    <a href="{other}/partner">Partner</a>
    <a href="{other}/gone">Gone</a>
</body>
</html>"#,
        site = site.uri(),
        other = other.uri()
    )
}

async fn mount_sample_site(site: &MockServer, other: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_page(site, other)))
        .mount(site)
        .await;

    mount_head(site, "/about", 200).await;
    mount_head(site, "/broken", 404).await;
    mount_head(site, "/contact", 301).await;
    mount_head(other, "/partner", 200).await;
    mount_head(other, "/gone", 503).await;
}

#[tokio::test]
async fn test_download_and_analyze_page() {
    let site = MockServer::start().await;
    let other = MockServer::start().await;
    mount_sample_site(&site, &other).await;

    let page_url = format!("{}/", site.uri());
    let content = PageDownloader::new(reqwest::Client::new())
        .download(&page_url)
        .await
        .unwrap();

    let result = analyzer(Duration::from_secs(5), Duration::from_secs(10))
        .analyze_with_deadline(&page_url, &content, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.html_version, HtmlVersion::Html5);
    assert_eq!(result.title, "Sample Site");
    assert_eq!(result.headings["h1"], vec!["Welcome"]);
    assert_eq!(result.headings["h2"], vec!["News", "Contact"]);
    assert!(!result.headings.contains_key("h3"));
    assert!(result.has_login_form);

    assert_eq!(
        result.internal_links,
        vec![
            format!("{}/about", site.uri()),
            format!("{}/broken", site.uri()),
            format!("{}/contact", site.uri()),
        ]
    );
    assert_eq!(
        result.external_links,
        vec![
            format!("{}/partner", other.uri()),
            format!("{}/gone", other.uri()),
        ]
    );
    assert_eq!(result.inaccessible_link_count, 2);
}

#[tokio::test]
async fn test_count_never_exceeds_link_total() {
    let site = MockServer::start().await;
    let page = r#"<html><body>
        <a href="/a">a</a>
        <a href="/a">a again</a>
        <a href="http://127.0.0.1:1/refused">refused</a>
    </body></html>"#;
    mount_head(&site, "/a", 500).await;

    let result = analyzer(Duration::from_secs(5), Duration::from_secs(10))
        .analyze(&site.uri(), page.as_bytes(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.html_version, HtmlVersion::Html4OrEarlier);
    assert_eq!(result.total_links(), 3);
    assert_eq!(result.internal_links.len(), 2);
    assert_eq!(result.inaccessible_link_count, 3);
    assert!(result.inaccessible_link_count <= result.total_links());
}

#[tokio::test]
async fn test_repeated_analysis_is_stable() {
    let site = MockServer::start().await;
    let other = MockServer::start().await;
    mount_sample_site(&site, &other).await;

    let page_url = format!("{}/", site.uri());
    let content = sample_page(&site, &other);
    let analyzer = analyzer(Duration::from_secs(5), Duration::from_secs(10));

    let first = analyzer
        .analyze(&page_url, content.as_bytes(), &CancellationToken::new())
        .await
        .unwrap();
    let second = analyzer
        .analyze(&page_url, content.as_bytes(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_deadline_counts_pending_links_inaccessible() {
    let site = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&site)
        .await;
    mount_head(&site, "/fast", 200).await;

    let page = br#"<html><a href="/slow">slow</a><a href="/fast">fast</a></html>"#;

    let started = Instant::now();
    let result = analyzer(Duration::from_secs(30), Duration::from_millis(500))
        .analyze_with_deadline(&site.uri(), page, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.internal_links.len(), 2);
    assert_eq!(result.inaccessible_link_count, 1);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_xhtml_strict_page() {
    let site = MockServer::start().await;
    let page = br#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml"><head><title>Old</title></head>
<body><h3>Legacy</h3></body></html>"#;

    let result = analyzer(Duration::from_secs(5), Duration::from_secs(10))
        .analyze(&site.uri(), page, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.html_version, HtmlVersion::Xhtml10);
    assert_eq!(result.title, "Old");
    assert_eq!(result.headings["h3"], vec!["Legacy"]);
    assert!(!result.has_login_form);
    assert_eq!(result.total_links(), 0);
}
