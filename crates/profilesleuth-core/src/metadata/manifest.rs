/// The `manifest.json` of one extension version folder.
use super::json::{lenient_string, load_json};
use crate::config::MANIFEST_FILE;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub default_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

impl Manifest {
    pub fn load(version_dir: &Path) -> Option<Self> {
        load_json(&version_dir.join(MANIFEST_FILE))
    }

    /// `default_title` if set and non-empty, otherwise `name`.
    pub fn raw_name(&self) -> Option<&str> {
        [self.default_title.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(default_title: Option<&str>, name: Option<&str>) -> Manifest {
        Manifest {
            default_title: default_title.map(str::to_string),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn default_title_wins_over_name() {
        assert_eq!(
            manifest(Some("Title"), Some("Name")).raw_name(),
            Some("Title")
        );
    }

    #[test]
    fn empty_default_title_falls_back_to_name() {
        assert_eq!(manifest(Some(""), Some("Name")).raw_name(), Some("Name"));
        assert_eq!(manifest(None, Some("Name")).raw_name(), Some("Name"));
    }

    #[test]
    fn no_names_is_none() {
        assert_eq!(manifest(None, None).raw_name(), None);
        assert_eq!(manifest(Some(""), Some("")).raw_name(), None);
    }
}
