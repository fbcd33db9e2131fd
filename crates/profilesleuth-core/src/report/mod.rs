/// Report renderers — text, JSON, and CSV.
///
/// Each renderer writes to any `io::Write` sink so the binary can target
/// stdout while tests capture into a `Vec<u8>`.
pub mod csv;
pub mod json;
pub mod text;

use crate::error::CoreResult;
use crate::model::Inventory;
use std::io::Write;

/// Default number of entries in the "largest extensions" summary.
pub const DEFAULT_TOP_EXTENSIONS: usize = 5;

/// Mutually exclusive output modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    /// JSON wins if both flags are set; the CLI already rejects that combination.
    pub fn from_flags(json: bool, csv: bool) -> Self {
        if json {
            Self::Json
        } else if csv {
            Self::Csv
        } else {
            Self::Text
        }
    }
}

/// Knobs for the human-readable renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Highlight sizes above 1 GiB with ANSI colour.
    pub color: bool,
    /// Entries in the global "largest extensions" summary.
    pub top: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            color: true,
            top: DEFAULT_TOP_EXTENSIONS,
        }
    }
}

/// Render `inventory` in `format` to `out`.
pub fn render<W: Write>(
    inventory: &Inventory,
    format: OutputFormat,
    options: &TextOptions,
    out: &mut W,
) -> CoreResult<()> {
    match format {
        OutputFormat::Text => text::write_text(inventory, options, out),
        OutputFormat::Json => self::json::write_json(inventory, out),
        OutputFormat::Csv => self::csv::write_csv(inventory, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Text);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Csv);
    }

    #[test]
    fn render_dispatches_on_format() {
        let inventory = Inventory::default();
        let mut out = Vec::new();
        render(&inventory, OutputFormat::Json, &TextOptions::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }
}
