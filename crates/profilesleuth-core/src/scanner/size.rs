/// Recursive byte summation using `jwalk`.
///
/// The walk runs serially on the calling thread and never follows
/// symlinks. Entries that cannot be read (permission denied, vanished
/// mid-walk) contribute zero bytes and are logged at debug level.
use std::path::Path;
use tracing::debug;

/// Total logical size in bytes of all regular files under `path`.
///
/// Returns 0 for a missing or unreadable directory.
pub fn dir_size(path: &Path) -> u64 {
    let walker = jwalk::WalkDir::new(path)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    let mut total: u64 = 0;
    let mut error_count: u64 = 0;

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                error_count += 1;
                debug!("Skipping unreadable entry under {}: {err}", path.display());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        // Stat with symlink_metadata so a link is never charged for its target.
        match std::fs::symlink_metadata(entry.path()) {
            Ok(meta) => total += meta.len(),
            Err(err) => {
                error_count += 1;
                debug!("Cannot stat {}: {err}", entry.path().display());
            }
        }
    }

    if error_count > 0 {
        debug!(
            "{} unreadable entries skipped while sizing {}",
            error_count,
            path.display()
        );
    }
    total
}
