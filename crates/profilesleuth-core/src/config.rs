/// Scan configuration and well-known file names inside the browser's
/// user-data directory.
use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

/// Global metadata file holding `profile.info_cache`.
pub const LOCAL_STATE_FILE: &str = "Local State";
/// Per-profile preferences document.
pub const PREFERENCES_FILE: &str = "Preferences";
/// Per-profile directory holding one folder per installed extension.
pub const EXTENSIONS_DIR: &str = "Extensions";
/// Extension manifest inside each version folder.
pub const MANIFEST_FILE: &str = "manifest.json";
/// Locale bundle directory inside each version folder.
pub const LOCALES_DIR: &str = "_locales";
/// Message bundle inside each locale directory.
pub const MESSAGES_FILE: &str = "messages.json";

/// Default minimum size (MB) for a profile or extension to be reported.
pub const DEFAULT_MIN_SIZE_MB: f64 = 50.0;

/// Inputs for one aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Browser user-data directory containing `Local State` and profiles.
    pub root_dir: PathBuf,
    /// Profiles and extensions smaller than this (in MB) are left out.
    pub min_size_mb: f64,
}

impl ScanConfig {
    /// Build a validated config. The threshold must be finite and non-negative.
    pub fn new(root_dir: impl Into<PathBuf>, min_size_mb: f64) -> CoreResult<Self> {
        validate_threshold(min_size_mb)?;
        Ok(Self {
            root_dir: root_dir.into(),
            min_size_mb,
        })
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            min_size_mb: DEFAULT_MIN_SIZE_MB,
        }
    }
}

/// Reject NaN, infinities, and negative thresholds.
pub fn validate_threshold(min_size_mb: f64) -> CoreResult<f64> {
    if min_size_mb.is_finite() && min_size_mb >= 0.0 {
        Ok(min_size_mb)
    } else {
        Err(CoreError::InvalidThreshold(min_size_mb))
    }
}

/// Platform default location of the Chrome user-data directory.
///
/// Falls back to the current directory when no home/config directory can
/// be resolved (e.g. a stripped-down service account).
pub fn default_root_dir() -> PathBuf {
    let base = if cfg!(target_os = "macos") {
        dirs::data_dir().map(|d| d.join("Google").join("Chrome"))
    } else if cfg!(windows) {
        dirs::data_local_dir().map(|d| d.join("Google").join("Chrome").join("User Data"))
    } else {
        dirs::config_dir().map(|d| d.join("google-chrome"))
    };
    base.unwrap_or_else(|| PathBuf::from("."))
}
