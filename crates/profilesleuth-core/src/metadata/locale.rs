/// A locale message bundle: `_locales/<locale>/messages.json`.
use super::json::load_json;
use crate::config::MESSAGES_FILE;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// `{ "<key>": { "message": "<text>", ... }, ... }`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LocaleBundle {
    entries: HashMap<String, Value>,
}

impl LocaleBundle {
    /// Load `<locale_dir>/messages.json`, or `None` if absent or malformed.
    pub fn load(locale_dir: &Path) -> Option<Self> {
        load_json(&locale_dir.join(MESSAGES_FILE))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The `message` text for `key`, if the entry exists and carries a string.
    pub fn message(&self, key: &str) -> Option<&str> {
        self.entries.get(key)?.get("message")?.as_str()
    }
}
