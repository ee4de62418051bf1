//! # imgcopy Copy Command
//!
//! File: cli/src/commands/copy.rs
//!
//! ## Overview
//!
//! The one operation imgcopy performs: copy a single file from a source path to
//! a destination path and print a single status line describing the outcome.
//!
//! ## Architecture
//!
//! 1. **Assemble** a `CopyJob`: start from a preset, apply the merged config
//!    file, then the command-line arguments (`build_job`).
//! 2. **Announce** (`Terse` style only): `Copying <src> to <dst>`.
//! 3. **Execute**: optional source-existence check, then the copy-with-metadata
//!    primitive from `common::fs::copy` (`execute`).
//! 4. **Report** the `Outcome` on stdout (`report`).
//!
//! A failed copy is an outcome, not an error: it is printed and the process
//! still exits 0. Only configuration problems and stdout write failures are
//! returned as `Err`.
//!
//! ## Usage
//!
//! ```bash
//! # Run the default (capture) preset
//! imgcopy
//!
//! # Copy an arbitrary file, checking the source first
//! imgcopy --check-source ~/Downloads/photo.jpg client/public/images/
//! ```
//!
use crate::common::fs::{copy::copy_file_with_metadata, paths};
use crate::core::config::{self, Config};
use crate::core::error::{CopyError, Result};
use crate::core::preset::{CopyJob, MessageStyle, Preset};
use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::Args;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Arguments for the copy operation.
#[derive(Args, Debug, Default)]
pub struct CopyArgs {
    /// File to copy. Overrides the preset and config file.
    #[arg(requires = "destination", value_parser = NonEmptyStringValueParser::new())]
    pub source: Option<String>,

    /// Where to copy it. An existing directory receives the file under its own name.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub destination: Option<String>,

    /// Built-in job to start from.
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Report "not found" and skip the copy when the source does not exist.
    #[arg(long)]
    pub check_source: bool,

    /// Resolve the destination against the current directory before copying.
    #[arg(long)]
    pub absolute: bool,

    /// Wording of the status messages.
    #[arg(short, long, value_enum)]
    pub style: Option<MessageStyle>,
}

/// Result of one copy attempt. Reported once, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        source: PathBuf,
        destination: PathBuf,
    },
    Failure(CopyError),
}

/// Entry point for the copy operation.
///
/// # Errors
///
/// Returns an `Err` if the configuration cannot be loaded or stdout cannot be
/// written. A failed copy is reported on stdout and yields `Ok(())`.
pub fn handle_copy(args: CopyArgs) -> Result<()> {
    let config = config::load_config()?;
    let job = build_job(&args, &config);
    debug!("Assembled copy job: {:?}", job);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = run(&job, &mut out).context("Failed to write status to stdout")?;
    info!("Copy finished: {:?}", outcome);
    Ok(())
}

/// Layers preset, config file and command-line arguments into one job.
pub fn build_job(args: &CopyArgs, config: &Config) -> CopyJob {
    // Explicit paths skip the implicit default preset; a named preset still applies.
    let mut job = match (args.preset.or(config.copy.preset), &args.source, &args.destination) {
        (None, Some(source), Some(destination)) => {
            CopyJob::new(paths::expand_tilde(source), paths::expand_tilde(destination))
        }
        (preset, _, _) => {
            let preset = preset.unwrap_or_default();
            debug!("Starting from preset {:?}", preset);
            preset.job()
        }
    };

    let file = &config.copy;
    if let Some(source) = &file.source {
        job.source = PathBuf::from(source);
    }
    if let Some(destination) = &file.destination {
        job.destination = PathBuf::from(destination);
    }
    if let Some(check) = file.check_source {
        job.check_source = check;
    }
    if let Some(absolute) = file.absolute_destination {
        job.absolute_destination = absolute;
    }
    if let Some(style) = file.style {
        job.style = style;
    }

    if let Some(source) = args.source.as_deref() {
        job.source = paths::expand_tilde(source);
    }
    if let Some(destination) = args.destination.as_deref() {
        job.destination = paths::expand_tilde(destination);
    }
    job.check_source |= args.check_source;
    job.absolute_destination |= args.absolute;
    if let Some(style) = args.style {
        job.style = style;
    }
    job
}

/// Announces, executes and reports `job`, writing status lines to `out`.
pub fn run(job: &CopyJob, out: &mut impl Write) -> io::Result<Outcome> {
    if job.style == MessageStyle::Terse {
        // An unresolvable destination is reported by `execute` below.
        if let Ok(destination) = planned_destination(job) {
            announce(&job.source, &destination, out)?;
        }
    }
    let outcome = execute(job);
    report(&outcome, job.style, out)?;
    Ok(outcome)
}

/// Performs the copy described by `job`.
pub fn execute(job: &CopyJob) -> Outcome {
    match try_copy(job) {
        Ok(destination) => Outcome::Success {
            source: job.source.clone(),
            destination,
        },
        Err(err) => Outcome::Failure(err),
    }
}

fn try_copy(job: &CopyJob) -> std::result::Result<PathBuf, CopyError> {
    if job.check_source && !job.source.exists() {
        return Err(CopyError::NotFound {
            path: job.source.clone(),
        });
    }
    let destination = paths::resolve_destination(&job.source, &planned_destination(job)?);
    copy_file_with_metadata(&job.source, &destination)?;
    Ok(destination)
}

/// The destination as the user will see it, before any directory resolution.
fn planned_destination(job: &CopyJob) -> io::Result<PathBuf> {
    if job.absolute_destination {
        paths::make_absolute(&job.destination)
    } else {
        Ok(job.destination.clone())
    }
}

/// Writes `Copying <src> to <dst>`.
pub fn announce(source: &Path, destination: &Path, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Copying {} to {}",
        source.display(),
        destination.display()
    )
}

/// Writes the single status line for `outcome`.
pub fn report(outcome: &Outcome, style: MessageStyle, out: &mut impl Write) -> io::Result<()> {
    match (outcome, style) {
        (Outcome::Success { .. }, MessageStyle::Terse) => writeln!(out, "Success"),
        (
            Outcome::Success {
                source,
                destination,
            },
            MessageStyle::Verbose,
        ) => writeln!(
            out,
            "Successfully copied {} to {}",
            source.display(),
            destination.display()
        ),
        (Outcome::Failure(err @ CopyError::NotFound { .. }), _) => writeln!(out, "{}", err),
        (Outcome::Failure(CopyError::Io { description }), MessageStyle::Terse) => {
            writeln!(out, "Error: {}", description)
        }
        (Outcome::Failure(CopyError::Io { description }), MessageStyle::Verbose) => {
            writeln!(out, "Error copying file: {}", description)
        }
    }
}
