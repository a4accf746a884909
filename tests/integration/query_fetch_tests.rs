use std::time::Duration;

use arec::config::FetchConfig;
use arec::query_input::resolve;
use httpmock::prelude::*;

fn fetch_config() -> FetchConfig {
    FetchConfig {
        enabled: true,
        timeout: Duration::from_secs(2),
    }
}

#[test]
fn url_query_is_replaced_by_page_text() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/jobs/42");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html><body><h1>QA Engineer</h1><p>Selenium and manual testing</p></body></html>");
    });

    let url = server.url("/jobs/42");
    let resolved = resolve(&url, &fetch_config());

    page.assert();
    assert_eq!(resolved.text, "QA Engineer\nSelenium and manual testing");
    assert_eq!(resolved.fetched_from.as_deref(), Some(url.as_str()));
}

#[test]
fn fetch_sends_browser_user_agent() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/ua").header_exists("user-agent");
        then.status(200).body("<p>ok</p>");
    });

    let _ = resolve(&server.url("/ua"), &fetch_config());
    page.assert();
}

#[test]
fn failed_fetch_keeps_raw_query() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(404);
    });

    let url = server.url("/gone");
    let resolved = resolve(&url, &fetch_config());
    assert_eq!(resolved.text, url);
    assert!(resolved.fetched_from.is_none());
}

#[test]
fn blank_page_keeps_raw_query() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/blank");
        then.status(200).body("<html><script>var a = 1;</script></html>");
    });

    let url = server.url("/blank");
    assert_eq!(resolve(&url, &fetch_config()).text, url);
}
