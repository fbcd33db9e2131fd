/// ProfileSleuth Core — profile inventory, name resolution, and reporting.
///
/// This crate contains all business logic with zero CLI dependencies.
/// Every operation is a read-only, single-threaded pass over the browser's
/// user-data directory.
///
/// # Modules
///
/// - [`model`] — Profile/extension records and size helpers.
/// - [`metadata`] — Tolerant JSON loading of `Local State`, `Preferences`,
///   `manifest.json`, and locale message bundles.
/// - [`scanner`] — Profile/extension enumeration and recursive byte summation.
/// - [`resolve`] — Friendly-name resolution for profiles and extensions.
/// - [`analysis`] — The aggregation pass and top-N extension selection.
/// - [`report`] — Text, JSON, and CSV renderers.
/// - [`config`] — Scan configuration and default root discovery.
pub mod analysis;
pub mod config;
pub mod error;
pub mod metadata;
pub mod model;
pub mod report;
pub mod resolve;
pub mod scanner;

pub use analysis::aggregate;
pub use config::ScanConfig;
pub use error::{CoreError, CoreResult};
pub use model::{ExtensionRecord, Inventory, ProfileRecord};
