/// JSON report: an array of profile objects with embedded extensions.
use crate::error::CoreResult;
use crate::model::size::bytes_to_mb;
use crate::model::{ExtensionRecord, Inventory, ProfileRecord};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ProfileJson<'a> {
    profile_name: &'a str,
    profile_dir: Cow<'a, str>,
    profile_size_bytes: u64,
    profile_size_mb: f64,
    extensions: Vec<ExtensionJson<'a>>,
}

#[derive(Debug, Serialize)]
struct ExtensionJson<'a> {
    extension_name: &'a str,
    extension_dir: Cow<'a, str>,
    extension_size_bytes: u64,
    extension_size_mb: f64,
    profile_name: &'a str,
}

impl<'a> From<&'a ExtensionRecord> for ExtensionJson<'a> {
    fn from(ext: &'a ExtensionRecord) -> Self {
        Self {
            extension_name: &ext.display_name,
            extension_dir: ext.directory_path.to_string_lossy(),
            extension_size_bytes: ext.size_bytes,
            extension_size_mb: bytes_to_mb(ext.size_bytes),
            profile_name: &ext.owning_profile_name,
        }
    }
}

impl<'a> From<&'a ProfileRecord> for ProfileJson<'a> {
    fn from(profile: &'a ProfileRecord) -> Self {
        Self {
            profile_name: &profile.display_name,
            profile_dir: profile.directory_path.to_string_lossy(),
            profile_size_bytes: profile.size_bytes,
            profile_size_mb: bytes_to_mb(profile.size_bytes),
            extensions: profile.extensions.iter().map(ExtensionJson::from).collect(),
        }
    }
}

/// Pretty-printed JSON, profiles in aggregation order, trailing newline.
pub fn write_json<W: Write>(inventory: &Inventory, out: &mut W) -> CoreResult<()> {
    let profiles: Vec<ProfileJson<'_>> = inventory.profiles.iter().map(ProfileJson::from).collect();
    serde_json::to_writer_pretty(&mut *out, &profiles)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::path::PathBuf;

    #[test]
    fn emits_expected_fields() {
        let ext = ExtensionRecord {
            display_name: "Widget".into(),
            directory_path: PathBuf::from("/data/Default/Extensions/abc"),
            size_bytes: 3 * 1024 * 1024,
            owning_profile_name: "Work".into(),
        };
        let inventory = Inventory {
            profiles: vec![ProfileRecord {
                display_name: "Work".into(),
                directory_path: PathBuf::from("/data/Default"),
                size_bytes: 1024 * 1024 + 512 * 1024,
                extensions: vec![ext.clone()],
            }],
            extensions: vec![ext],
        };

        let mut out = Vec::new();
        write_json(&inventory, &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        let profile = &value[0];
        assert_eq!(profile["profile_name"], "Work");
        assert_eq!(profile["profile_dir"], "/data/Default");
        assert_eq!(profile["profile_size_bytes"], 1_572_864);
        assert_eq!(profile["profile_size_mb"], 1.5);

        let ext = &profile["extensions"][0];
        assert_eq!(ext["extension_name"], "Widget");
        assert_eq!(ext["extension_dir"], "/data/Default/Extensions/abc");
        assert_eq!(ext["extension_size_bytes"], 3_145_728);
        assert_eq!(ext["extension_size_mb"], 3.0);
        assert_eq!(ext["profile_name"], "Work");
    }

    #[test]
    fn empty_inventory_is_empty_array() {
        let mut out = Vec::new();
        write_json(&Inventory::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
