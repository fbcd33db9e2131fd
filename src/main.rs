//! ProfileSleuth — thin binary entry point. All logic lives in the
//! `profilesleuth-core` crate.
use clap::Parser;

fn main() {
    let cli = profilesleuth::cli::Cli::parse();

    // Logs go to stderr so JSON/CSV on stdout stay machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.log_level()))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("ProfileSleuth starting");

    if let Err(err) = profilesleuth::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
