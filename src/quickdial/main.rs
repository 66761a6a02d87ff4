//! # Quickdial CLI
//!
//! The binary is thin: argument parsing, rendering and dispatch live in
//! `cli/`, this file only starts logging, runs the CLI and turns an error into
//! exit code 1.
//!
//! Logs go to stderr through `tracing-subscriber`. The default level is `warn`,
//! `-v` raises it to `debug`, and `RUST_LOG` overrides both.

use tracing_subscriber::EnvFilter;

mod cli;

fn main() {
    let args = cli::setup::parse();
    init_logging(args.verbose);

    if let Err(e) = cli::run(args) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "quickdial=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
