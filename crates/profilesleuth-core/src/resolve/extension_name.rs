/// Extension display names from `manifest.json`.
use super::i18n::{resolve_placeholder, ManifestString};
use crate::metadata::Manifest;
use crate::scanner::base_name;
use std::path::Path;
use tracing::debug;

/// Display name for one extension version folder. Never fails.
///
/// Without a usable manifest the extension-ID folder (the version folder's
/// parent) names the extension. A placeholder that cannot be resolved is
/// returned unchanged so the failure stays visible.
pub fn resolve_extension_name(version_dir: &Path) -> String {
    let id_folder_name = || {
        version_dir
            .parent()
            .map(base_name)
            .unwrap_or_else(|| base_name(version_dir))
    };

    let Some(manifest) = Manifest::load(version_dir) else {
        return id_folder_name();
    };
    let Some(raw) = manifest.raw_name() else {
        debug!("Manifest in {} has no name", version_dir.display());
        return id_folder_name();
    };

    match ManifestString::parse(raw) {
        ManifestString::Literal(text) => text.to_string(),
        ManifestString::Placeholder(_) => {
            resolve_placeholder(raw, version_dir).unwrap_or_else(|| raw.to_string())
        }
    }
}
