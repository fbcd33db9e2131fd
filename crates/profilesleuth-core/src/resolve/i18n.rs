/// `__MSG_key__` placeholder resolution against an extension's locale bundles.
///
/// No locale negotiation is done: every `_locales/<locale>/messages.json`
/// is scanned in name order and the first bundle that defines the key
/// decides the result.
use crate::config::LOCALES_DIR;
use crate::metadata::LocaleBundle;
use crate::scanner::subdirectories;
use std::path::Path;
use tracing::debug;

/// Marker that opens every manifest placeholder.
pub const PLACEHOLDER_PREFIX: &str = "__MSG_";
const PLACEHOLDER_SUFFIX: &str = "__";

/// A manifest string, classified once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestString<'a> {
    /// `__MSG_<key>__`, carrying the bare key.
    Placeholder(&'a str),
    /// Anything else, used as-is.
    Literal(&'a str),
}

impl<'a> ManifestString<'a> {
    pub fn parse(raw: &'a str) -> Self {
        if raw.starts_with(PLACEHOLDER_PREFIX) && raw.ends_with(PLACEHOLDER_SUFFIX) {
            if let Some(key) = raw.trim_matches('_').strip_prefix("MSG_") {
                if !key.is_empty() {
                    return Self::Placeholder(key);
                }
            }
        }
        Self::Literal(raw)
    }
}

/// `true` for any string that still starts with the placeholder marker,
/// resolved or not.
pub fn is_placeholder_text(s: &str) -> bool {
    s.starts_with(PLACEHOLDER_PREFIX)
}

/// Resolve `placeholder` using the bundles under `<version_dir>/_locales`.
///
/// Tries the full key first; if no bundle defines it and the key contains
/// an underscore, retries with the part before the first underscore
/// (`name_releasebuild` → `name`). Returns `None` for non-placeholders,
/// a missing `_locales` directory, or an unknown key.
pub fn resolve_placeholder(placeholder: &str, version_dir: &Path) -> Option<String> {
    let ManifestString::Placeholder(key) = ManifestString::parse(placeholder) else {
        return None;
    };

    let locales_dir = version_dir.join(LOCALES_DIR);
    if !locales_dir.is_dir() {
        debug!("No {LOCALES_DIR} in {}", version_dir.display());
        return None;
    }

    if let Some(message) = find_in_locales(&locales_dir, key) {
        return Some(message);
    }

    let (fallback_key, _) = key.split_once('_')?;
    debug!("Key {key} not found, retrying with {fallback_key}");
    find_in_locales(&locales_dir, fallback_key)
}

fn find_in_locales(locales_dir: &Path, key: &str) -> Option<String> {
    for locale_dir in subdirectories(locales_dir) {
        let Some(bundle) = LocaleBundle::load(&locale_dir) else {
            continue;
        };
        if bundle.contains(key) {
            debug!("Found {key} in {}", locale_dir.display());
            return bundle
                .message(key)
                .filter(|m| !m.is_empty())
                .map(str::to_string);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MESSAGES_FILE;
    use std::fs;
    use tempfile::TempDir;

    fn add_locale(version_dir: &Path, locale: &str, json: &str) {
        let dir = version_dir.join(LOCALES_DIR).join(locale);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MESSAGES_FILE), json).unwrap();
    }

    #[test]
    fn parses_placeholders_and_literals() {
        assert_eq!(
            ManifestString::parse("__MSG_extName__"),
            ManifestString::Placeholder("extName")
        );
        assert_eq!(
            ManifestString::parse("__MSG_name_releasebuild__"),
            ManifestString::Placeholder("name_releasebuild")
        );
        assert_eq!(
            ManifestString::parse("Widget"),
            ManifestString::Literal("Widget")
        );
        assert_eq!(
            ManifestString::parse("__MSG_open"),
            ManifestString::Literal("__MSG_open")
        );
        assert_eq!(
            ManifestString::parse("__MSG__"),
            ManifestString::Literal("__MSG__")
        );
    }

    #[test]
    fn placeholder_text_detection() {
        assert!(is_placeholder_text("__MSG_extName__"));
        assert!(is_placeholder_text("__MSG_unterminated"));
        assert!(!is_placeholder_text("Widget"));
    }

    #[test]
    fn resolves_direct_key() {
        let tmp = TempDir::new().unwrap();
        add_locale(tmp.path(), "en", r#"{"extName": {"message": "Widget"}}"#);
        assert_eq!(
            resolve_placeholder("__MSG_extName__", tmp.path()).as_deref(),
            Some("Widget")
        );
    }

    #[test]
    fn falls_back_to_key_prefix() {
        let tmp = TempDir::new().unwrap();
        add_locale(tmp.path(), "en", r#"{"name": {"message": "Base"}}"#);
        assert_eq!(
            resolve_placeholder("__MSG_name_releasebuild__", tmp.path()).as_deref(),
            Some("Base")
        );
    }

    #[test]
    fn scans_every_locale() {
        let tmp = TempDir::new().unwrap();
        add_locale(tmp.path(), "de", r#"{"other": {"message": "Andere"}}"#);
        add_locale(tmp.path(), "es", "not json at all");
        add_locale(tmp.path(), "fr", r#"{"appTitle": {"message": "Titre"}}"#);
        assert_eq!(
            resolve_placeholder("__MSG_appTitle__", tmp.path()).as_deref(),
            Some("Titre")
        );
    }

    #[test]
    fn first_locale_in_name_order_wins() {
        let tmp = TempDir::new().unwrap();
        add_locale(tmp.path(), "fr", r#"{"t": {"message": "Bonjour"}}"#);
        add_locale(tmp.path(), "en_GB", r#"{"t": {"message": "Hello"}}"#);
        assert_eq!(
            resolve_placeholder("__MSG_t__", tmp.path()).as_deref(),
            Some("Hello")
        );
    }

    #[test]
    fn unresolvable_cases_are_none() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(resolve_placeholder("__MSG_extName__", tmp.path()), None);

        add_locale(tmp.path(), "en", r#"{"other": {"message": "x"}}"#);
        assert_eq!(resolve_placeholder("__MSG_extName__", tmp.path()), None);
        assert_eq!(resolve_placeholder("__MSG_ext_name__", tmp.path()), None);
        assert_eq!(resolve_placeholder("Widget", tmp.path()), None);
    }
}
