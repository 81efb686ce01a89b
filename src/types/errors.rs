use std::fmt;

// === StoreError ===

/// Errors raised by the key-value store collaborator.
#[derive(Debug, Clone)]
pub enum StoreError {
    /// The backing store rejected or failed the operation.
    Backend(String),
    /// A stored blob could not be encoded or decoded as JSON.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Backend(msg) => write!(f, "Store backend error: {}", msg),
            StoreError::Serialization(msg) => write!(f, "Store serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === SiteError ===

/// Errors related to site (bookmark) operations.
#[derive(Debug)]
pub enum SiteError {
    /// Site with the given ID was not found.
    NotFound(String),
    /// A site with the same URL already exists.
    DuplicateUrl(String),
    /// The key-value store failed.
    Store(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::NotFound(id) => write!(f, "Site not found: {}", id),
            SiteError::DuplicateUrl(url) => write!(f, "Duplicate site URL: {}", url),
            SiteError::Store(msg) => write!(f, "Site store error: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {}

impl From<StoreError> for SiteError {
    fn from(err: StoreError) -> Self {
        SiteError::Store(err.to_string())
    }
}

// === CategoryError ===

/// Errors related to category list operations.
#[derive(Debug)]
pub enum CategoryError {
    /// A category with the same name is already stored.
    Duplicate(String),
    /// The key-value store failed.
    Store(String),
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryError::Duplicate(name) => write!(f, "Duplicate category: {}", name),
            CategoryError::Store(msg) => write!(f, "Category store error: {}", msg),
        }
    }
}

impl std::error::Error for CategoryError {}

impl From<StoreError> for CategoryError {
    fn from(err: StoreError) -> Self {
        CategoryError::Store(err.to_string())
    }
}

// === SnippetError ===

/// Errors related to snippet operations.
#[derive(Debug)]
pub enum SnippetError {
    /// Snippet with the given ID was not found.
    NotFound(String),
    /// The key-value store failed.
    Store(String),
}

impl fmt::Display for SnippetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnippetError::NotFound(id) => write!(f, "Snippet not found: {}", id),
            SnippetError::Store(msg) => write!(f, "Snippet store error: {}", msg),
        }
    }
}

impl std::error::Error for SnippetError {}

impl From<StoreError> for SnippetError {
    fn from(err: StoreError) -> Self {
        SnippetError::Store(err.to_string())
    }
}

// === AuthError ===

/// Errors related to admin authentication.
#[derive(Debug)]
pub enum AuthError {
    /// The supplied password does not match the admin password.
    InvalidPassword,
    /// The supplied session token is unknown or expired.
    InvalidToken,
    /// Random token material could not be generated.
    TokenGeneration(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidPassword => write!(f, "Invalid admin password"),
            AuthError::InvalidToken => write!(f, "Invalid session token"),
            AuthError::TokenGeneration(msg) => write!(f, "Token generation failed: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

// === ScrapeError ===

/// Errors related to page metadata scraping.
#[derive(Debug)]
pub enum ScrapeError {
    /// The target URL could not be interpreted.
    InvalidUrl(String),
    /// The page could not be fetched.
    Network(String),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            ScrapeError::Network(msg) => write!(f, "Metadata fetch failed: {}", msg),
        }
    }
}

impl std::error::Error for ScrapeError {}

// === ExportError ===

/// Errors related to backup export, import, and reset.
#[derive(Debug)]
pub enum ExportError {
    /// The import payload is not a valid backup document.
    MalformedInput(String),
    /// The key-value store failed.
    Store(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::MalformedInput(msg) => write!(f, "Malformed import payload: {}", msg),
            ExportError::Store(msg) => write!(f, "Export store error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<StoreError> for ExportError {
    fn from(err: StoreError) -> Self {
        ExportError::Store(err.to_string())
    }
}
