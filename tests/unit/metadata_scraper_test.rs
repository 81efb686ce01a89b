//! Unit tests for page metadata extraction.
//!
//! Everything here exercises the pure scanning helpers; no network involved.

use rstest::rstest;

use nexnav::services::metadata_scraper::{
    extract_description, extract_icon_href, extract_metadata, extract_title, normalize_url,
    origin_of, resolve_icon,
};
use nexnav::types::errors::ScrapeError;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title> Docs.rs </title>
  <meta charset="utf-8">
  <meta name="description" content="Rust crate documentation">
  <link rel="icon" href="/favicon.svg">
</head>
<body>ignored</body>
</html>"#;

#[test]
fn extract_metadata_pulls_all_three_fields() {
    let meta = extract_metadata(PAGE, "https://docs.rs/about");

    assert_eq!(meta.title, "Docs.rs");
    assert_eq!(meta.description, "Rust crate documentation");
    assert_eq!(meta.icon, "https://docs.rs/favicon.svg");
}

#[test]
fn extract_metadata_falls_back_to_favicon_ico() {
    let meta = extract_metadata("<html><title>x</title></html>", "https://example.com/page");
    assert_eq!(meta.icon, "https://example.com/favicon.ico");
}

#[test]
fn extract_title_handles_attributes_and_case() {
    assert_eq!(
        extract_title("<TITLE lang=\"en\">Hello</TITLE>"),
        Some("Hello".to_string())
    );
    assert_eq!(extract_title("<title></title>"), None);
    assert_eq!(extract_title("no title here"), None);
}

#[test]
fn extract_description_accepts_either_attribute_order() {
    let html = r#"<meta content="swapped order" name="description">"#;
    assert_eq!(extract_description(html), Some("swapped order".to_string()));

    let html = r#"<meta name="viewport" content="width=device-width">"#;
    assert_eq!(extract_description(html), None);
}

#[test]
fn extract_icon_href_matches_rel_variants() {
    let html = r#"<link rel="shortcut icon" href="fav.png">"#;
    assert_eq!(extract_icon_href(html), Some("fav.png".to_string()));

    let html = r#"<link rel="apple-touch-icon" href='/touch.png'>"#;
    assert_eq!(extract_icon_href(html), Some("/touch.png".to_string()));

    let html = r#"<link rel="stylesheet" href="style.css">"#;
    assert_eq!(extract_icon_href(html), None);
}

#[test]
fn normalize_url_prepends_https_scheme() {
    assert_eq!(normalize_url("docs.rs").unwrap(), "https://docs.rs");
    assert_eq!(
        normalize_url("http://example.com").unwrap(),
        "http://example.com"
    );
    assert_eq!(normalize_url("  docs.rs  ").unwrap(), "https://docs.rs");
}

#[test]
fn normalize_url_rejects_empty_input() {
    assert!(matches!(
        normalize_url("   ").unwrap_err(),
        ScrapeError::InvalidUrl(_)
    ));
}

#[rstest]
#[case("https://example.com/a/b", Some("https://example.com"))]
#[case("https://example.com", Some("https://example.com"))]
#[case("http://example.com:8080/x", Some("http://example.com:8080"))]
#[case("no-scheme", None)]
fn origin_of_strips_path(#[case] url: &str, #[case] expected: Option<&str>) {
    assert_eq!(origin_of(url), expected.map(str::to_string));
}

#[rstest]
#[case("https://cdn.example/i.png", "https://cdn.example/i.png")]
#[case("data:image/png;base64,AAAA", "data:image/png;base64,AAAA")]
#[case("//cdn.example/i.png", "https://cdn.example/i.png")]
#[case("/i.png", "https://example.com/i.png")]
#[case("i.png", "https://example.com/sub/i.png")]
fn resolve_icon_against_page(#[case] href: &str, #[case] expected: &str) {
    assert_eq!(resolve_icon(href, "https://example.com/sub/page.html"), expected);
}

#[test]
fn resolve_relative_icon_without_path() {
    assert_eq!(
        resolve_icon("fav.ico", "https://example.com"),
        "https://example.com/fav.ico"
    );
}
