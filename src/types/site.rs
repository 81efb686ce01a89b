use serde::{Deserialize, Serialize};

/// Category assigned to sites whose own category was deleted.
pub const UNCATEGORIZED: &str = "uncategorized";

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

/// Represents one bookmark entry on the dashboard.
///
/// `category` is free-form: it does not have to exist in the stored category
/// list. Categories referenced only here are surfaced as derived entries in
/// the effective ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Client-supplied fields for creating a site. `id` and timestamps are
/// assigned by the engine, never by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteDraft {
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub starred: bool,
}

impl Default for SiteDraft {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: String::new(),
            description: String::new(),
            icon: String::new(),
            category: default_category(),
            starred: false,
        }
    }
}

/// Partial update for an existing site. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SitePatch {
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub starred: Option<bool>,
}

/// Category filter applied when listing sites for display.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteFilter {
    /// Every site.
    All,
    /// Only starred sites, regardless of category.
    Featured,
    /// Sites whose category matches exactly.
    Category(String),
}

impl SiteFilter {
    /// Parses the wire representation: `"all"`, `"featured"`, or a category name.
    pub fn parse(value: &str) -> SiteFilter {
        match value {
            "all" => SiteFilter::All,
            "featured" => SiteFilter::Featured,
            other => SiteFilter::Category(other.to_string()),
        }
    }
}
