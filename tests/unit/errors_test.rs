//! Unit tests for the error taxonomy: display strings and conversions.

use nexnav::types::errors::{
    AuthError, CategoryError, ExportError, ScrapeError, SiteError, SnippetError, StoreError,
};

#[test]
fn store_error_display() {
    let err = StoreError::Backend("disk full".to_string());
    assert_eq!(err.to_string(), "Store backend error: disk full");

    let err = StoreError::Serialization("bad json".to_string());
    assert_eq!(err.to_string(), "Store serialization error: bad json");
}

#[test]
fn site_error_display() {
    assert_eq!(
        SiteError::NotFound("abc".to_string()).to_string(),
        "Site not found: abc"
    );
    assert_eq!(
        SiteError::DuplicateUrl("https://docs.rs".to_string()).to_string(),
        "Duplicate site URL: https://docs.rs"
    );
}

#[test]
fn category_error_display() {
    assert_eq!(
        CategoryError::Duplicate("tools".to_string()).to_string(),
        "Duplicate category: tools"
    );
}

#[test]
fn snippet_error_display() {
    assert_eq!(
        SnippetError::NotFound("s1".to_string()).to_string(),
        "Snippet not found: s1"
    );
}

#[test]
fn auth_error_display() {
    assert_eq!(AuthError::InvalidPassword.to_string(), "Invalid admin password");
    assert_eq!(AuthError::InvalidToken.to_string(), "Invalid session token");
}

#[test]
fn scrape_error_display() {
    assert_eq!(
        ScrapeError::InvalidUrl("::".to_string()).to_string(),
        "Invalid URL: ::"
    );
    assert_eq!(
        ScrapeError::Network("timeout".to_string()).to_string(),
        "Metadata fetch failed: timeout"
    );
}

#[test]
fn export_error_display() {
    assert_eq!(
        ExportError::MalformedInput("sites missing".to_string()).to_string(),
        "Malformed import payload: sites missing"
    );
}

#[test]
fn store_error_converts_into_domain_errors() {
    let source = StoreError::Backend("locked".to_string());

    let site: SiteError = source.clone().into();
    assert!(matches!(site, SiteError::Store(msg) if msg.contains("locked")));

    let category: CategoryError = source.clone().into();
    assert!(matches!(category, CategoryError::Store(msg) if msg.contains("locked")));

    let snippet: SnippetError = source.clone().into();
    assert!(matches!(snippet, SnippetError::Store(msg) if msg.contains("locked")));

    let export: ExportError = source.into();
    assert!(matches!(export, ExportError::Store(msg) if msg.contains("locked")));
}

#[test]
fn errors_implement_std_error() {
    fn assert_error<E: std::error::Error>() {}

    assert_error::<StoreError>();
    assert_error::<SiteError>();
    assert_error::<CategoryError>();
    assert_error::<SnippetError>();
    assert_error::<AuthError>();
    assert_error::<ScrapeError>();
    assert_error::<ExportError>();
}
