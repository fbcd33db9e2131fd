/// Data model for a ProfileSleuth inventory.
///
/// Re-exports the per-run records and the size helpers used at the
/// display-formatting boundary.
pub mod record;
pub mod size;

pub use record::{ExtensionRecord, Inventory, ProfileRecord};
