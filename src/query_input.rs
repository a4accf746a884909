//! Query resolution: a query that is a web address is replaced by the
//! readable text of the page it points at.

use reqwest::Url;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::error::{ArecError, Result};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Elements whose text is never shown to a reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// The text that will actually be ranked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub text: String,
    /// Set when `text` was fetched from this address.
    pub fetched_from: Option<String>,
}

impl ResolvedQuery {
    fn raw(query: &str) -> Self {
        Self {
            text: query.to_string(),
            fetched_from: None,
        }
    }
}

/// `Some` when the whole (trimmed) query is an http(s) address.
#[must_use]
pub fn parse_url(query: &str) -> Option<Url> {
    let trimmed = query.trim();
    if trimmed.contains(char::is_whitespace) {
        return None;
    }
    Url::parse(trimmed)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
}

/// Resolve `query`, fetching the page when it is a URL and fetching is
/// enabled. Fetch failures fall back to the raw query.
#[must_use]
pub fn resolve(query: &str, config: &FetchConfig) -> ResolvedQuery {
    if !config.enabled {
        return ResolvedQuery::raw(query);
    }
    let Some(url) = parse_url(query) else {
        return ResolvedQuery::raw(query);
    };

    match fetch_text(&url, config) {
        Ok(text) if !text.is_empty() => {
            debug!(url = %url, chars = text.len(), "resolved query from page");
            ResolvedQuery {
                text,
                fetched_from: Some(url.to_string()),
            }
        }
        Ok(_) => {
            warn!(url = %url, "page has no readable text; ranking the address itself");
            ResolvedQuery::raw(query)
        }
        Err(err) => {
            warn!(url = %url, error = %err, "fetch failed; ranking the address itself");
            ResolvedQuery::raw(query)
        }
    }
}

/// Download `url` and reduce the body to text.
pub fn fetch_text(url: &Url, config: &FetchConfig) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| ArecError::Fetch(format!("http client: {err}")))?;

    let response = client
        .get(url.clone())
        .send()
        .map_err(|err| ArecError::Fetch(format!("{url}: {err}")))?;
    if !response.status().is_success() {
        return Err(ArecError::Fetch(format!("{url}: HTTP {}", response.status())));
    }

    let body = response
        .text()
        .map_err(|err| ArecError::Fetch(format!("{url}: read body: {err}")))?;
    Ok(html_to_text(&body))
}

/// Visible text of an HTML document, one phrase per line.
///
/// Runs of two or more spaces also break a line.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut fragments = Vec::new();
    collect_text(document.root_element(), &mut fragments);

    fragments
        .iter()
        .flat_map(|fragment| fragment.lines())
        .flat_map(|line| line.trim().split("  "))
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(element: ElementRef<'_>, fragments: &mut Vec<String>) {
    if HIDDEN_ELEMENTS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => fragments.push(text.to_string()),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, fragments);
                }
            }
            _ => {}
        }
    }
}
