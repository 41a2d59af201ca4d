//! Entity state record returned by `/api/states/<entity>`.

use serde::Deserialize;

/// State record for a single Home Assistant entity.
///
/// All fields default to empty strings so a malformed body degrades to an
/// empty record instead of a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct HaState {
    #[serde(default)]
    pub entity_id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub last_changed: String,
    #[serde(default)]
    pub last_updated: String,
}

impl HaState {
    /// Permissive parse: unparseable JSON yields an empty record.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
