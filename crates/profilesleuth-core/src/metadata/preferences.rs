/// The per-profile `Preferences` document (only the fields used for naming).
use super::json::{lenient_list, lenient_string, load_json};
use crate::config::PREFERENCES_FILE;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub profile: ProfileSection,
    #[serde(default, deserialize_with = "lenient_list")]
    pub account_info: Option<Vec<AccountInfo>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSection {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gaia_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_name: Option<String>,
}

/// A signed-in account listed under `account_info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: Option<String>,
}

impl Preferences {
    /// Load `<profile_dir>/Preferences`, or `None` if absent or malformed.
    pub fn load(profile_dir: &Path) -> Option<Self> {
        load_json(&profile_dir.join(PREFERENCES_FILE))
    }
}
