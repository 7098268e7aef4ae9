//! Integration tests for the seo_audit library.
//!
//! These tests drive the public API against a local mock HTTP server.
//! They do not make real network requests.

use std::time::Duration;

use seo_audit::{Auditor, Config};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Home</title>
  <meta name="description" content="A small test site">
  <link rel="canonical" href="/">
  <link rel="alternate" hreflang="fr" href="/fr/">
</head>
<body>
  <h1>Welcome</h1>
  <h2>Products</h2>
  <h2>About</h2>
  <p>Plain paragraph text for the word counter.</p>
  <a href="http://other.test/one">One</a>
  <a href="http://other.test/two" rel="nofollow">Two</a>
  <a href="http://other.test/three">Three</a>
  <a href="/x">Internal X</a>
  <a href="/y">Internal Y</a>
  <img src="/a.png" alt="A">
  <img src="/b.png">
</body>
</html>"#;

fn test_auditor(timeout_seconds: u64) -> Auditor {
    let config = Config {
        timeout_seconds,
        user_agent: "seo_audit_test/1.0".to_string(),
        ..Default::default()
    };
    Auditor::new(&config).expect("Failed to build auditor")
}

async fn serve(route: &str, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(body),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_basic_audit_end_to_end() {
    let server = serve("/", HOME_PAGE).await;
    let url = format!("{}/", server.uri());

    let report = test_auditor(5).basic(&url).await;
    let report = report.report().expect("audit should succeed");

    assert_eq!(report.metadata.title.as_deref(), Some("Home"));
    assert_eq!(report.content.h1_count, 1);
    assert_eq!(report.content.h2_count, 2);
    assert_eq!(report.links.total_links, 5);
    assert_eq!(report.links.external_links, 3);
    assert_eq!(report.links.internal_links, 2);
    assert_eq!(report.images.total_images, 2);
    assert_eq!(report.images.images_without_alt, 1);
    assert_eq!(report.http.status, 200);
    assert!(!report.http.using_https);
}

#[tokio::test]
async fn test_full_audit_end_to_end() {
    let server = serve("/blog/post", HOME_PAGE).await;
    let url = format!("{}/blog/post", server.uri());

    let report = test_auditor(5).full(&url).await;
    let value = serde_json::to_value(&report).expect("serializes");

    assert_eq!(value["Input"]["URL"], url.as_str());
    assert_eq!(value["Input"]["Input type"], "URL with path");
    assert_eq!(value["title"]["found"], "Found");
    assert_eq!(value["title"]["data"], "Home");
    assert_eq!(value["meta_description"]["words"], 4);
    assert_eq!(value["metadata_info"]["charset"], "utf-8");
    assert_eq!(
        value["metadata_info"]["canonical"],
        format!("{}/", server.uri()).as_str()
    );
    assert_eq!(
        value["metadata_info"]["hreflangs"],
        json!([{"language": "fr", "url": format!("{}/fr/", server.uri())}])
    );
    assert_eq!(value["Page Headings summary"]["H2"], 2);
    assert_eq!(value["links_summary"]["Total links"], 5);
    assert_eq!(value["links_summary"]["External links"], 5);
    assert_eq!(value["links_summary"]["Internal"], 0);
    assert_eq!(value["links_summary"]["Nofollow count"], 1);
    assert_eq!(
        value["links_summary"]["links"][3],
        json!({"href": format!("{}/x", server.uri()), "text": "Internal X"})
    );
    assert_eq!(value["images_analysis"]["summary"]["No alt tag"], 1);
}

#[tokio::test]
async fn test_fetch_timeout_yields_error_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(HOME_PAGE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let report = test_auditor(1).basic(&server.uri()).await;
    assert_eq!(
        serde_json::to_value(&report).expect("serializes"),
        json!({"error": "Failed to fetch URL content"})
    );
}

#[tokio::test]
async fn test_not_found_yields_error_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(HOME_PAGE))
        .mount(&server)
        .await;

    let report = test_auditor(5).full(&format!("{}/gone", server.uri())).await;
    assert_eq!(
        serde_json::to_value(&report).expect("serializes"),
        json!({"error": "Failed to fetch URL content"})
    );
}

#[tokio::test]
async fn test_full_audit_resolves_against_redirect_target() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/landing/"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/landing/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"<body><a href="next">Next</a></body>"#),
        )
        .mount(&server)
        .await;

    let report = test_auditor(5)
        .full(&format!("{}/start", server.uri()))
        .await
        .into_report()
        .expect("audit should succeed");
    assert_eq!(
        report.links_summary.links[0].href,
        format!("{}/landing/next", server.uri())
    );
}

#[tokio::test]
async fn test_same_content_audited_twice_is_identical() {
    let server = serve("/", HOME_PAGE).await;
    let url = format!("{}/", server.uri());
    let auditor = test_auditor(5);

    assert_eq!(auditor.basic(&url).await, auditor.basic(&url).await);
    assert_eq!(auditor.full(&url).await, auditor.full(&url).await);
}

#[tokio::test]
async fn test_concurrent_audits_are_independent() {
    let first = serve("/", "<title>First</title><body><h1>a</h1></body>").await;
    let second = serve("/", "<title>Second</title><body><h1>a</h1><h1>b</h1></body>").await;
    let auditor = test_auditor(5);

    let first_url = format!("{}/", first.uri());
    let second_url = format!("{}/", second.uri());
    let (a, b) = tokio::join!(auditor.basic(&first_url), auditor.basic(&second_url));

    let a = a.into_report().expect("first audit succeeds");
    let b = b.into_report().expect("second audit succeeds");
    assert_eq!(a.metadata.title.as_deref(), Some("First"));
    assert_eq!(a.content.h1_count, 1);
    assert_eq!(b.metadata.title.as_deref(), Some("Second"));
    assert_eq!(b.content.h1_count, 2);
}

#[tokio::test]
async fn test_convenience_entry_points_report_fetch_failure() {
    let report = seo_audit::basic_audit("not a url").await;
    assert_eq!(report.error(), Some("Failed to fetch URL content"));

    let report = seo_audit::full_audit("ftp://files.test/").await;
    assert_eq!(report.error(), Some("Failed to fetch URL content"));
}
