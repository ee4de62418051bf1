//! # imgcopy Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the imgcopy CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Running the copy command and turning infrastructure errors into an exit code
//!
//! ## Examples
//!
//! ```bash
//! # Run the built-in default copy
//! imgcopy
//!
//! # Run the import preset with debug logs on stderr
//! imgcopy -vv --preset import
//!
//! # Copy an explicit file
//! imgcopy /tmp/a.jpg /tmp/out/a.jpg
//! ```
//!
//! Exit codes: 0 once a copy has been attempted, whatever its outcome; 1 when
//! configuration could not be loaded; 2 for usage errors (reported by Clap).
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The copy command
mod common; // Shared filesystem utilities
mod core; // Errors, configuration, presets

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "imgcopy",
    about = "Copy a single image file, with its metadata, and report the outcome",
    long_about = "Copies one file from SOURCE to DESTINATION, preserving timestamps and permissions.\n\
                  Without arguments, runs the built-in 'capture' job.",
    version
)]
struct Cli {
    #[command(flatten)]
    copy: commands::copy::CopyArgs,
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::copy::handle_copy(cli.copy) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
