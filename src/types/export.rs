use serde::{Deserialize, Serialize};

use crate::types::site::Site;

/// Current backup payload version.
pub const EXPORT_VERSION: u32 = 1;

/// Full backup of the navigation data: sites plus the stored category order.
/// Snippets are deliberately not part of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    pub version: u32,
    pub exported_at: i64,
    pub sites: Vec<Site>,
    #[serde(default)]
    pub categories: Vec<String>,
}
