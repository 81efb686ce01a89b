//! Page metadata scraper for NexNav.
//!
//! Fetches a page and pulls out the bits the site form can prefill: the
//! `<title>` text, the meta description, and a favicon URL. Extraction is
//! plain substring scanning over the HTML — good enough for prefill, with no
//! pretence of being a real parser.

use std::time::Duration;

use crate::types::errors::ScrapeError;

/// Metadata extracted from a fetched page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Trait defining the metadata scrape operation.
pub trait MetadataScraperTrait {
    fn fetch_metadata(&self, url: &str) -> Result<PageMetadata, ScrapeError>;
}

/// Scraper backed by a blocking HTTP client.
pub struct MetadataScraper {
    client: reqwest::blocking::Client,
}

impl MetadataScraper {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; NexNav/1.0)")
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl MetadataScraperTrait for MetadataScraper {
    fn fetch_metadata(&self, url: &str) -> Result<PageMetadata, ScrapeError> {
        let url = normalize_url(url)?;
        let html = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.text())
            .map_err(|e| ScrapeError::Network(e.to_string()))?;
        Ok(extract_metadata(&html, &url))
    }
}

/// Pulls title, description, and icon out of raw HTML.
pub fn extract_metadata(html: &str, page_url: &str) -> PageMetadata {
    let icon = match extract_icon_href(html) {
        Some(href) => resolve_icon(&href, page_url),
        None => origin_of(page_url)
            .map(|origin| format!("{}/favicon.ico", origin))
            .unwrap_or_default(),
    };

    PageMetadata {
        title: extract_title(html).unwrap_or_default(),
        description: extract_description(html).unwrap_or_default(),
        icon,
    }
}

/// Prepends `https://` when the URL carries no scheme.
pub fn normalize_url(url: &str) -> Result<String, ScrapeError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ScrapeError::InvalidUrl(url.to_string()));
    }
    if trimmed.contains("://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("https://{}", trimmed))
    }
}

/// Case-insensitive (ASCII) substring search starting at `from`.
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..]
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
        .map(|i| from + i)
}

/// Text of the first `<title>` element, trimmed.
pub fn extract_title(html: &str) -> Option<String> {
    let open = find_ci(html, "<title", 0)?;
    let content_start = open + html[open..].find('>')? + 1;
    let close = find_ci(html, "</title>", content_start)?;
    let title = html[content_start..close].trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// `content` of the first `<meta name="description">` tag, in either
/// attribute order.
pub fn extract_description(html: &str) -> Option<String> {
    for tag in scan_tags(html, "<meta") {
        let is_description = attr_value(tag, "name")
            .map(|v| v.eq_ignore_ascii_case("description"))
            .unwrap_or(false);
        if is_description {
            if let Some(content) = attr_value(tag, "content") {
                let content = content.trim().to_string();
                if !content.is_empty() {
                    return Some(content);
                }
            }
        }
    }
    None
}

/// `href` of the first `<link>` whose `rel` mentions an icon
/// (covers `icon`, `shortcut icon`, `apple-touch-icon`).
pub fn extract_icon_href(html: &str) -> Option<String> {
    for tag in scan_tags(html, "<link") {
        let is_icon = attr_value(tag, "rel")
            .map(|v| v.to_ascii_lowercase().contains("icon"))
            .unwrap_or(false);
        if is_icon {
            if let Some(href) = attr_value(tag, "href") {
                let href = href.trim().to_string();
                if !href.is_empty() {
                    return Some(href);
                }
            }
        }
    }
    None
}

/// Yields each tag body (between the opening token and `>`) for tags
/// starting with `open`, e.g. `"<meta"`.
fn scan_tags<'a>(html: &'a str, open: &str) -> Vec<&'a str> {
    let mut tags = Vec::new();
    let mut pos = 0;
    while let Some(start) = find_ci(html, open, pos) {
        match html[start..].find('>') {
            Some(end) => {
                tags.push(&html[start..start + end]);
                pos = start + end + 1;
            }
            None => break,
        }
    }
    tags
}

/// Value of a quoted `attr="..."` (or `attr='...'`) inside a tag body.
fn attr_value(tag: &str, attr: &str) -> Option<String> {
    let mut pos = 0;
    loop {
        let at = find_ci(tag, attr, pos)?;
        // Reject matches inside a longer attribute name.
        let preceded_ok = at == 0
            || tag[..at]
                .chars()
                .last()
                .map(|c| c.is_whitespace())
                .unwrap_or(true);
        let rest = tag[at + attr.len()..].trim_start();
        if preceded_ok && rest.starts_with('=') {
            let rest = rest[1..].trim_start();
            let quote = rest.chars().next()?;
            if quote == '"' || quote == '\'' {
                let value = &rest[1..];
                return value.find(quote).map(|end| value[..end].to_string());
            }
            return None;
        }
        pos = at + attr.len();
    }
}

/// `scheme://host[:port]` of a URL, without any path.
pub fn origin_of(url: &str) -> Option<String> {
    let scheme_end = url.find("://")?;
    let host_start = scheme_end + 3;
    match url[host_start..].find('/') {
        Some(slash) => Some(url[..host_start + slash].to_string()),
        None => Some(url.to_string()),
    }
}

/// Resolves an icon `href` against the page it was found on.
pub fn resolve_icon(href: &str, page_url: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") || href.starts_with("data:") {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix("//") {
        let scheme = page_url.split("://").next().unwrap_or("https");
        return format!("{}://{}", scheme, rest);
    }
    let origin = match origin_of(page_url) {
        Some(origin) => origin,
        None => return href.to_string(),
    };
    if href.starts_with('/') {
        return format!("{}{}", origin, href);
    }
    // Path-relative: resolve against the page's directory.
    let base = match page_url[origin.len()..].rfind('/') {
        Some(slash) => &page_url[..origin.len() + slash],
        None => &page_url[..origin.len()],
    };
    format!("{}/{}", base, href)
}
