/// Friendly-name resolution.
///
/// - [`profile_name`] — Preferences → `Local State` info cache → folder name.
/// - [`i18n`] — `__MSG_key__` placeholders looked up in `_locales` bundles.
/// - [`extension_name`] — manifest title/name, routed through [`i18n`].
///
/// None of these fail: each degrades to a folder name or the raw string.
pub mod extension_name;
pub mod i18n;
pub mod profile_name;

pub use extension_name::resolve_extension_name;
pub use i18n::{is_placeholder_text, resolve_placeholder, ManifestString};
pub use profile_name::{is_generic, resolve_profile_name};
