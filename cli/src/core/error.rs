//! # imgcopy Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout imgcopy. There are two
//! families, handled very differently:
//!
//! - `CopyError`: the outcome of a failed copy. It is never propagated; the copy
//!   command turns it into a status line on stdout and the process still exits 0.
//! - `ImgcopyError`: problems outside the copy itself (a broken config file, an
//!   unreadable working directory). These travel through `Result<T>` (an alias for
//!   `anyhow::Result<T>`) up to `main`, which prints them and exits 1.
//!
//! ## Examples
//!
//! ```rust
//! // Return an infrastructure error with extra context
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
//!
//! // Convert an I/O failure into a copy outcome
//! let err = CopyError::from(io_error);
//! ```
//!
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single copy attempt failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// The source was checked before copying and was absent.
    #[error("Source file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Any failure raised by the filesystem while copying.
    #[error("{description}")]
    Io { description: String },
}

impl From<io::Error> for CopyError {
    fn from(err: io::Error) -> Self {
        CopyError::Io {
            description: err.to_string(),
        }
    }
}

/// Infrastructure errors that abort the run before any copy is attempted.
#[derive(Error, Debug)]
pub enum ImgcopyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
