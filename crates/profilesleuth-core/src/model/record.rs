/// Records produced by one aggregation pass.
///
/// Built once per run, never mutated after construction, and dropped at
/// process exit. Paths are stored as absolute (canonicalised where possible).
use std::path::PathBuf;

/// One installed extension (all of its version folders combined).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRecord {
    pub display_name: String,
    /// The extension-ID folder, not an individual version folder.
    pub directory_path: PathBuf,
    pub size_bytes: u64,
    pub owning_profile_name: String,
}

/// One browser profile directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub display_name: String,
    pub directory_path: PathBuf,
    /// Size of the entire profile directory, including extensions that were
    /// filtered out of [`extensions`](Self::extensions).
    pub size_bytes: u64,
    /// Extensions that individually met the size threshold.
    pub extensions: Vec<ExtensionRecord>,
}

/// Result of [`aggregate`](crate::analysis::aggregate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Profiles that met the threshold, in enumeration order.
    pub profiles: Vec<ProfileRecord>,
    /// Every extension that met its own threshold, across all profiles,
    /// including those whose owning profile was filtered out.
    pub extensions: Vec<ExtensionRecord>,
}

impl Inventory {
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Sum of the reported profiles' sizes.
    pub fn total_size(&self) -> u64 {
        self.profiles.iter().map(|p| p.size_bytes).sum()
    }
}
