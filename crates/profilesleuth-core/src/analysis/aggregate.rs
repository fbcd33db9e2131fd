/// The single aggregation pass over a browser user-data directory.
///
/// For every profile directory: resolve its display name, size the whole
/// directory, then size and name each installed extension. Thresholds are
/// applied per extension first and per profile last, so:
///
/// - a profile's size always covers its entire directory, including
///   extensions that were too small to list;
/// - an extension that passes its own threshold appears in the flattened
///   list even if its owning profile is filtered out.
use crate::metadata::NameCache;
use crate::model::size::meets_threshold;
use crate::model::{ExtensionRecord, Inventory, ProfileRecord};
use crate::resolve::{is_placeholder_text, resolve_extension_name, resolve_profile_name};
use crate::scanner::{dir_size, enumerate_extension_ids, enumerate_profiles, version_dirs};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Build the inventory for `root_dir`, keeping only profiles and extensions
/// of at least `min_size_mb` megabytes.
///
/// Read-only and deterministic: two runs over an unchanged tree produce
/// equal inventories. A missing root yields an empty inventory.
pub fn aggregate(root_dir: &Path, min_size_mb: f64) -> Inventory {
    let start = Instant::now();
    info!("Scanning profiles in {}", root_dir.display());

    let cache = NameCache::load(root_dir);
    let mut inventory = Inventory::default();
    let mut seen_profiles = 0usize;

    for profile_dir in enumerate_profiles(root_dir) {
        seen_profiles += 1;
        let profile_name = resolve_profile_name(&profile_dir, &cache);
        let size_bytes = dir_size(&profile_dir);
        debug!(
            "Profile {} ({}) = {} bytes",
            profile_name,
            profile_dir.display(),
            size_bytes
        );

        let mut extensions = Vec::new();
        for extension_dir in enumerate_extension_ids(&profile_dir) {
            let Some(extension) = inspect_extension(&extension_dir, &profile_name) else {
                continue;
            };
            if !meets_threshold(extension.size_bytes, min_size_mb) {
                debug!(
                    "Extension {} below threshold ({} bytes)",
                    extension.display_name, extension.size_bytes
                );
                continue;
            }
            inventory.extensions.push(extension.clone());
            extensions.push(extension);
        }

        if !meets_threshold(size_bytes, min_size_mb) {
            debug!("Profile {profile_name} below threshold ({size_bytes} bytes)");
            continue;
        }

        inventory.profiles.push(ProfileRecord {
            display_name: profile_name,
            directory_path: absolute(&profile_dir),
            size_bytes,
            extensions,
        });
    }

    info!(
        "Scanned {} profiles ({} reported, {} extensions) in {:?}",
        seen_profiles,
        inventory.profiles.len(),
        inventory.extensions.len(),
        start.elapsed()
    );
    inventory
}

/// Size and name one extension-ID folder across all of its versions.
///
/// Returns `None` when the folder has no version subdirectories.
fn inspect_extension(extension_dir: &Path, profile_name: &str) -> Option<ExtensionRecord> {
    let mut size_bytes: u64 = 0;
    let mut display_name: Option<String> = None;

    for version_dir in version_dirs(extension_dir) {
        size_bytes += dir_size(&version_dir);
        let candidate = resolve_extension_name(&version_dir);

        // Keep the first name, unless it is a placeholder and a later
        // version offers a real one.
        let replace = match &display_name {
            None => true,
            Some(current) => is_placeholder_text(current) && !is_placeholder_text(&candidate),
        };
        if replace {
            display_name = Some(candidate);
        }
    }

    let Some(display_name) = display_name else {
        debug!("No version folders in {}", extension_dir.display());
        return None;
    };

    Some(ExtensionRecord {
        display_name,
        directory_path: absolute(extension_dir),
        size_bytes,
        owning_profile_name: profile_name.to_string(),
    })
}

fn absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
