//! # imgcopy Built-in Copy Jobs
//!
//! File: cli/src/core/preset.rs
//!
//! ## Overview
//!
//! imgcopy grew out of two one-off copy scripts, each with its paths baked in.
//! Both live on here as presets so that a bare `imgcopy` still does exactly one
//! thing without any arguments:
//!
//! - **`capture`** (default): copies a captured media file into the site's image
//!   folder, resolving the destination to an absolute path and announcing the
//!   copy before it starts. Messages are terse (`Success`, `Error: ...`).
//! - **`import`**: copies an uploaded profile image, checking the source exists
//!   first. Messages are verbose (`Successfully copied ...`).
//!
//! Config files and command-line flags may override any field of the preset.
//!
use crate::common::fs::paths;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

const CAPTURE_SOURCE: &str = "~/.cache/imgcopy/media/capture.png";
const CAPTURE_DESTINATION: &str = "client/public/images/capture.png";

const IMPORT_SOURCE: &str = "~/Downloads/uploaded_image.jpg";
const IMPORT_DESTINATION: &str = "client/public/images/profile.jpg";

/// Wording used for the status lines printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    /// `Copying <src> to <dst>`, then `Success` or `Error: <e>`.
    Terse,
    /// `Successfully copied <src> to <dst>` or `Error copying file: <e>`.
    Verbose,
}

/// Selects one of the built-in copy jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Capture,
    Import,
}

/// A fully assembled copy request: one source, one destination, and how to run
/// and report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Fail with `NotFound` before touching the destination if the source is absent.
    pub check_source: bool,
    /// Resolve the destination against the current directory before copying.
    pub absolute_destination: bool,
    pub style: MessageStyle,
}

impl CopyJob {
    /// A job for explicitly given paths: no source check, destination used as
    /// given, terse messages.
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        CopyJob {
            source,
            destination,
            check_source: false,
            absolute_destination: false,
            style: MessageStyle::Terse,
        }
    }
}

impl Preset {
    /// Builds the job this preset stands for, with `~` already expanded.
    pub fn job(self) -> CopyJob {
        match self {
            Preset::Capture => CopyJob {
                source: paths::expand_tilde(CAPTURE_SOURCE),
                destination: paths::expand_tilde(CAPTURE_DESTINATION),
                check_source: false,
                absolute_destination: true,
                style: MessageStyle::Terse,
            },
            Preset::Import => CopyJob {
                source: paths::expand_tilde(IMPORT_SOURCE),
                destination: paths::expand_tilde(IMPORT_DESTINATION),
                check_source: true,
                absolute_destination: false,
                style: MessageStyle::Verbose,
            },
        }
    }
}
