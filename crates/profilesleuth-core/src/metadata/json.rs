/// Tolerant JSON loading.
///
/// Browser metadata files are written by another process that may be
/// running, may have crashed mid-write, or may belong to a different
/// browser version. Every failure mode collapses to `None`.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read and parse `path` as `T`.
///
/// Returns `None` if the file is absent, unreadable, or does not parse.
/// A leading UTF-8 byte-order mark is ignored.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.is_file() {
        debug!("JSON file not found: {}", path.display());
        return None;
    }

    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(err) => {
            debug!("Error reading {}: {err}", path.display());
            return None;
        }
    };
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("Error parsing JSON from {}: {err}", path.display());
            None
        }
    }
}

/// Deserialize a field as `Some(string)` only when it holds a JSON string.
///
/// Any other JSON type maps to `None` instead of failing the whole document.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Deserialize a field as a list only when it holds a JSON array.
///
/// Elements that don't match `T` become `T::default()` so the list length
/// is preserved.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}
