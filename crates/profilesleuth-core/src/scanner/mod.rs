/// Scanner module — enumerates the user-data directory.
///
/// Walks three fixed levels of the browser layout:
/// - **Profiles:** `Default` and `Profile *` directories under the root.
/// - **Extensions:** one folder per extension ID under `<profile>/Extensions`.
/// - **Versions:** one folder per installed version under each extension ID.
///
/// Every listing is returned sorted by name so repeated runs over an
/// unchanged tree visit entries in the same order. Unreadable directories
/// produce empty listings rather than errors.
pub mod size;

pub use size::dir_size;

use crate::config::EXTENSIONS_DIR;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the first profile the browser creates.
pub const DEFAULT_PROFILE_DIR: &str = "Default";
/// Prefix of every additional profile (`Profile 1`, `Profile 2`, ...).
pub const PROFILE_DIR_PREFIX: &str = "Profile ";

/// `true` for `Default` or any name starting with `Profile `.
pub fn is_profile_dir_name(name: &str) -> bool {
    name == DEFAULT_PROFILE_DIR || name.starts_with(PROFILE_DIR_PREFIX)
}

/// Return the profile directories directly under `root_dir`.
///
/// A missing root is reported once as a warning and yields no profiles.
pub fn enumerate_profiles(root_dir: &Path) -> Vec<PathBuf> {
    if !root_dir.is_dir() {
        warn!("Could not find browser data directory at {}", root_dir.display());
        return Vec::new();
    }

    subdirectories(root_dir)
        .into_iter()
        .filter(|p| p.file_name().and_then(|n| n.to_str()).is_some_and(is_profile_dir_name))
        .collect()
}

/// Return the extension-ID folders of a profile, or nothing if the profile
/// has no `Extensions` directory.
pub fn enumerate_extension_ids(profile_dir: &Path) -> Vec<PathBuf> {
    let extensions_dir = profile_dir.join(EXTENSIONS_DIR);
    if !extensions_dir.is_dir() {
        debug!("No {EXTENSIONS_DIR} directory in {}", profile_dir.display());
        return Vec::new();
    }
    subdirectories(&extensions_dir)
}

/// Return the version folders of one extension-ID folder, sorted by name.
pub fn version_dirs(extension_dir: &Path) -> Vec<PathBuf> {
    subdirectories(extension_dir)
}

/// Immediate child directories of `dir`, sorted by file name.
pub(crate) fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("Cannot list {}: {err}", dir.display());
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    dirs
}

/// Last path component as a displayable string.
pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths.iter().map(|p| base_name(p)).collect()
    }

    #[test]
    fn test_is_profile_dir_name() {
        assert!(is_profile_dir_name("Default"));
        assert!(is_profile_dir_name("Profile 1"));
        assert!(is_profile_dir_name("Profile abc"));
        assert!(!is_profile_dir_name("Profile"));
        assert!(!is_profile_dir_name("System Profile"));
        assert!(!is_profile_dir_name("default"));
        assert!(!is_profile_dir_name("Guest Profile"));
    }

    #[test]
    fn enumerates_only_profile_directories_sorted() {
        let tmp = TempDir::new().unwrap();
        for dir in ["Profile 2", "Default", "Crashpad", "Profile 1", "System Profile"] {
            fs::create_dir(tmp.path().join(dir)).unwrap();
        }
        // A file with a profile-like name is not a profile.
        fs::write(tmp.path().join("Profile 3"), b"x").unwrap();

        let profiles = enumerate_profiles(tmp.path());
        assert_eq!(names(&profiles), ["Default", "Profile 1", "Profile 2"]);
    }

    #[test]
    fn missing_root_yields_no_profiles() {
        let tmp = TempDir::new().unwrap();
        assert!(enumerate_profiles(&tmp.path().join("absent")).is_empty());
    }

    #[test]
    fn extension_and_version_listing() {
        let tmp = TempDir::new().unwrap();
        let profile = tmp.path().join("Default");
        assert!(enumerate_extension_ids(&profile).is_empty());

        let ext = profile.join(EXTENSIONS_DIR).join("abcdef");
        fs::create_dir_all(ext.join("2.0_0")).unwrap();
        fs::create_dir_all(ext.join("1.0_0")).unwrap();
        fs::write(ext.join("stray.txt"), b"x").unwrap();

        assert_eq!(names(&enumerate_extension_ids(&profile)), ["abcdef"]);
        assert_eq!(names(&version_dirs(&ext)), ["1.0_0", "2.0_0"]);
    }
}
