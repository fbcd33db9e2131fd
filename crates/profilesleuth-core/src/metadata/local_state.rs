/// The global `Local State` document and its per-profile name cache.
use super::json::{lenient_string, load_json};
use crate::config::LOCAL_STATE_FILE;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Name hints recorded for one profile directory in `profile.info_cache`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InfoCacheEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gaia_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LocalState {
    #[serde(default)]
    profile: ProfileSection,
}

#[derive(Debug, Default, Deserialize)]
struct ProfileSection {
    #[serde(default)]
    info_cache: HashMap<String, InfoCacheEntry>,
}

/// Read-only map from profile directory name (e.g. `"Profile 3"`) to its
/// cached name hints. Built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCache {
    entries: HashMap<String, InfoCacheEntry>,
}

impl NameCache {
    /// Load the cache from `<root>/Local State`. Absent or malformed → empty.
    pub fn load(root_dir: &Path) -> Self {
        let entries = load_json::<LocalState>(&root_dir.join(LOCAL_STATE_FILE))
            .map(|state| state.profile.info_cache)
            .unwrap_or_default();
        debug!("Loaded {} info_cache entries", entries.len());
        Self { entries }
    }

    pub fn from_entries(entries: HashMap<String, InfoCacheEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, profile_dir_name: &str) -> Option<&InfoCacheEntry> {
        self.entries.get(profile_dir_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_info_cache_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(LOCAL_STATE_FILE),
            r#"{"profile": {"info_cache": {
                "Default": {"name": "Work", "avatar_icon": "x"},
                "Profile 2": {"name": "Person 2", "gaia_name": "Bob"}
            }}, "browser": {}}"#,
        )
        .unwrap();

        let cache = NameCache::load(tmp.path());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("Default").unwrap().name.as_deref(), Some("Work"));
        assert_eq!(
            cache.get("Profile 2").unwrap().gaia_name.as_deref(),
            Some("Bob")
        );
        assert!(cache.get("Profile 9").is_none());
    }

    #[test]
    fn missing_or_malformed_local_state_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(NameCache::load(tmp.path()).is_empty());

        fs::write(tmp.path().join(LOCAL_STATE_FILE), "garbage").unwrap();
        assert!(NameCache::load(tmp.path()).is_empty());
    }
}
