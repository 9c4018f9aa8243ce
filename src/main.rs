//! Logwarden CLI - AI security log analyst
//!
//! Usage:
//!   logwarden [FILES]...            Analyze files as one batch
//!   logwarden --folder DIR          Analyze every file in a folder
//!   logwarden --watch DIR           Sentinel Mode

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let caps = ui::terminal::detect_capabilities();
            eprint!(
                "{}",
                ui::error::format_error(&e, caps.supports_color, caps.supports_unicode)
            );
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("logwarden={level}")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
