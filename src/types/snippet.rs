use serde::{Deserialize, Serialize};

/// Metadata for a reusable HTML/code snippet.
///
/// The snippet body is stored separately under `snippet:{id}`; only the
/// metadata lives in the `snippets_index` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetMeta {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
