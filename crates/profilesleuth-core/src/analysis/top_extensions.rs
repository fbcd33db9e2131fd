/// Top-N largest extensions analysis.
///
/// Ranks the flattened extension list of an [`Inventory`] for the
/// "largest extensions" summary.
use crate::model::{ExtensionRecord, Inventory};
use std::cmp::Ordering;

/// Descending by size; ties broken by name, then path, for stable output.
pub fn largest_first(a: &ExtensionRecord, b: &ExtensionRecord) -> Ordering {
    b.size_bytes
        .cmp(&a.size_bytes)
        .then_with(|| a.display_name.cmp(&b.display_name))
        .then_with(|| a.directory_path.cmp(&b.directory_path))
}

/// Get the `n` largest extensions across every profile.
pub fn top_extensions(inventory: &Inventory, n: usize) -> Vec<&ExtensionRecord> {
    let mut ranked: Vec<&ExtensionRecord> = inventory.extensions.iter().collect();
    ranked.sort_by(|a, b| largest_first(a, b));
    ranked.truncate(n);
    ranked
}
