/// Metadata documents read from the browser's user-data directory.
///
/// Every loader returns `None`/empty on a missing, unreadable, or
/// malformed file. Callers move on to their next name source.
pub mod json;
pub mod local_state;
pub mod locale;
pub mod manifest;
pub mod preferences;

pub use json::load_json;
pub use local_state::{InfoCacheEntry, NameCache};
pub use locale::LocaleBundle;
pub use manifest::Manifest;
pub use preferences::{AccountInfo, Preferences};
