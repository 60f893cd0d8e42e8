use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::DictError;

/// One emoji and the keywords that name it.
///
/// Mirrors a gemoji-style JSON record. `aliases` and `tags` default to empty
/// when absent; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    pub emoji: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl EmojiRecord {
    pub fn new(emoji: &str, aliases: &[&str], tags: &[&str]) -> Self {
        Self {
            emoji: emoji.to_string(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            description: None,
            category: None,
        }
    }

    /// Aliases followed by tags, original casing and order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.aliases
            .iter()
            .chain(self.tags.iter())
            .map(String::as_str)
    }
}

/// Parse a JSON array of records.
pub fn parse_records(json: &[u8]) -> Result<Vec<EmojiRecord>, DictError> {
    Ok(serde_json::from_slice(json)?)
}

/// Read and parse a JSON record file.
pub fn load_records(path: &Path) -> Result<Vec<EmojiRecord>, DictError> {
    parse_records(&fs::read(path)?)
}
