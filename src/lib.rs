//! ProfileSleuth — browser profile and extension disk-usage inventory.
//!
//! The binary is a thin shell around `profilesleuth-core`: parse flags,
//! run one aggregation pass, render the report to stdout.
pub mod cli;

use std::io::{self, Write};

use cli::Cli;
use profilesleuth_core::aggregate;
use profilesleuth_core::report::render;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.scan_config()?;
    let inventory = aggregate(&config.root_dir, config.min_size_mb);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    render(&inventory, cli.output_format(), &cli.text_options(), &mut out)?;
    out.flush()?;
    Ok(())
}
