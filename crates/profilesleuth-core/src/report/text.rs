/// Human-readable report: profiles and their extensions largest first,
/// followed by totals and the globally largest extensions.
use super::TextOptions;
use crate::analysis::{largest_first, top_extensions};
use crate::error::CoreResult;
use crate::model::size::{format_mb, is_large};
use crate::model::{Inventory, ProfileRecord};
use colored::Colorize;
use std::io::Write;

pub const EMPTY_MESSAGE: &str = "No profiles found or none above the specified threshold.";
pub const NO_EXTENSIONS_MESSAGE: &str = "  (No Extensions or all under threshold)";

pub fn write_text<W: Write>(
    inventory: &Inventory,
    options: &TextOptions,
    out: &mut W,
) -> CoreResult<()> {
    if inventory.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }

    let mut profiles: Vec<&ProfileRecord> = inventory.profiles.iter().collect();
    profiles.sort_by(|a, b| {
        b.size_bytes
            .cmp(&a.size_bytes)
            .then_with(|| a.display_name.cmp(&b.display_name))
    });

    writeln!(out)?;
    writeln!(out, "=== Chrome Profiles (sorted by size) ===")?;
    for profile in profiles {
        writeln!(
            out,
            "- {} [{}] : {}",
            profile.display_name,
            profile.directory_path.display(),
            size_label(profile.size_bytes, options.color)
        )?;

        if profile.extensions.is_empty() {
            writeln!(out, "{NO_EXTENSIONS_MESSAGE}")?;
            writeln!(out)?;
            continue;
        }

        let mut extensions: Vec<_> = profile.extensions.iter().collect();
        extensions.sort_by(|a, b| largest_first(a, b));

        writeln!(out, "  Extensions (sorted by size):")?;
        for ext in extensions {
            writeln!(
                out,
                "    • {}: {} => {}",
                ext.display_name,
                size_label(ext.size_bytes, options.color),
                ext.directory_path.display()
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Total profiles displayed: {}", inventory.profiles.len())?;
    writeln!(
        out,
        "Total disk usage (above threshold): {}",
        format_mb(inventory.total_size())
    )?;

    let top = top_extensions(inventory, options.top);
    if !top.is_empty() {
        writeln!(out)?;
        writeln!(out, "Top {} Largest Extensions (global):", options.top)?;
        for ext in top {
            writeln!(
                out,
                "  • {}: {} (Profile: {})",
                ext.display_name,
                size_label(ext.size_bytes, options.color),
                ext.owning_profile_name
            )?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// `"12.34 MB"`, in red when above 1 GiB and colour is on.
fn size_label(bytes: u64, color: bool) -> String {
    let label = format_mb(bytes);
    if color && is_large(bytes) {
        label.red().to_string()
    } else {
        label
    }
}
