// src/main.rs
use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use font_config_info::cli::{self, Args};
use font_config_info::{generate, running_at, write_report};
use fontinfo_gtk4::Gtk4Backend;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(cli::exit_code(&err));
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("font-config-info: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = args.into_config();
    let preamble = running_at(&chrono::Local::now());

    tracing::debug!("Connecting to the desktop session");
    let backend = Gtk4Backend::new(&config).context("cannot connect to the desktop session")?;
    let report = generate(&backend, &config, preamble)?;
    tracing::debug!("Writing {} sections", report.sections.len());

    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, &report)?;
    Ok(())
}

// Diagnostics go to stderr so they never mix with the report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
