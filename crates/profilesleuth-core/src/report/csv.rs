/// CSV report: one row per listed extension.
///
/// A profile with no listed extensions still gets exactly one row, with the
/// extension columns left empty.
use crate::error::CoreResult;
use crate::model::size::bytes_to_mb;
use crate::model::Inventory;
use std::io::Write;

pub const HEADER: [&str; 6] = [
    "profile_name",
    "profile_dir",
    "profile_size_mb",
    "extension_name",
    "extension_dir",
    "extension_size_mb",
];

fn mb_field(bytes: u64) -> String {
    format!("{:.2}", bytes_to_mb(bytes))
}

pub fn write_csv<W: Write>(inventory: &Inventory, out: &mut W) -> CoreResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;

    for profile in &inventory.profiles {
        let profile_dir = profile.directory_path.to_string_lossy();
        let profile_mb = mb_field(profile.size_bytes);

        if profile.extensions.is_empty() {
            writer.write_record([
                profile.display_name.as_str(),
                &*profile_dir,
                profile_mb.as_str(),
                "",
                "",
                "",
            ])?;
            continue;
        }

        for ext in &profile.extensions {
            writer.write_record([
                profile.display_name.as_str(),
                &*profile_dir,
                profile_mb.as_str(),
                ext.display_name.as_str(),
                &*ext.directory_path.to_string_lossy(),
                mb_field(ext.size_bytes).as_str(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
