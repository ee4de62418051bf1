//! # imgcopy Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! This module provides the copy primitive behind `imgcopy`: copying one regular
//! file together with its metadata (access/modification times and permission
//! bits), creating or overwriting the destination.
//!
//! ## Architecture
//!
//! `copy_file_with_metadata` never writes to the destination path directly:
//!
//! 1. The source is opened and its metadata captured.
//! 2. Bytes are streamed into a hidden temp file created by `tempfile` in the
//!    destination's directory.
//! 3. The source's timestamps (via `filetime`) and permissions are applied to
//!    the temp file.
//! 4. The temp file is renamed over the destination.
//!
//! A failure at any step drops the temp file, so the destination is either the
//! complete new copy or whatever was there before. Because the temp file must be
//! created next to the destination, a missing or read-only destination directory
//! fails at step 2.
//!
//! Before staging, a symlinked destination is resolved to the file it points to
//! (the link is kept, its target replaced), and an existing read-only destination
//! is refused with `PermissionDenied`. A hardlinked destination ends up as a new
//! inode; the other links keep the old contents.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::copy;
//! use std::path::Path;
//!
//! # fn run_example() -> std::io::Result<()> {
//! let bytes = copy::copy_file_with_metadata(Path::new("/tmp/a.jpg"), Path::new("/tmp/out/a.jpg"))?;
//! println!("Copied {} bytes", bytes);
//! # Ok(())
//! # }
//! ```
//!
use filetime::FileTime;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Fixed, short prefix for the staged file. Long destination names would push
/// a name-derived prefix past the filesystem's name limit.
const STAGING_PREFIX: &str = ".imgcopy.";

/// Copies `source` to `destination`, preserving timestamps and permissions.
///
/// The destination is replaced atomically: it is created if absent and
/// overwritten if present, but never left half-written. A destination that is
/// a symbolic link is written through, so the file it points to receives the
/// copy and the link itself survives.
///
/// # Arguments
///
/// * `source` - The regular file to copy. Must exist and be readable.
/// * `destination` - The target file path. Its parent directory must exist and
///   be writable.
///
/// # Returns
///
/// * `io::Result<u64>` - The number of bytes copied.
///
/// # Errors
///
/// Returns the underlying `io::Error`, with the offending path appended to its
/// message, if:
/// - The source does not exist, cannot be read, or is not a regular file.
/// - The destination has no file name component.
/// - The existing destination file is read-only (`PermissionDenied`).
/// - The destination directory is missing or not writable.
/// - Writing the data, applying metadata, or the final rename fails.
pub fn copy_file_with_metadata(source: &Path, destination: &Path) -> io::Result<u64> {
    debug!("Opening source {:?}", source);
    let mut reader = File::open(source).map_err(|e| with_path(e, source))?;
    let metadata = reader.metadata().map_err(|e| with_path(e, source))?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Source is not a regular file: {}", source.display()),
        ));
    }

    let target = write_target(destination)?;
    if destination.file_name().is_none() || target.file_name().is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Destination has no file name: {}", destination.display()),
        ));
    }
    if let Ok(existing) = fs::metadata(&target) {
        if existing.is_file() && existing.permissions().readonly() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", target.display()),
            ));
        }
    }
    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut staged = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .suffix(".tmp")
        .tempfile_in(parent)?; // tempfile already names the directory in its errors
    debug!("Staging copy in {:?}", staged.path());

    let bytes = io::copy(&mut reader, staged.as_file_mut()).map_err(|e| with_path(e, &target))?;
    staged.as_file().sync_all()?;

    // Times first: a read-only mode would block the timestamp update on some platforms.
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(staged.path(), atime, mtime)?;
    fs::set_permissions(staged.path(), metadata.permissions())?;

    staged
        .persist(&target)
        .map_err(|e| with_path(e.error, &target))?;
    info!("Copied {} bytes from {:?} to {:?}", bytes, source, target);
    Ok(bytes)
}

/// The path whose contents get replaced: `destination` itself, or the file at
/// the end of its symlink chain.
fn write_target(destination: &Path) -> io::Result<PathBuf> {
    let is_link = fs::symlink_metadata(destination)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return Ok(destination.to_path_buf());
    }
    let target = match fs::canonicalize(destination) {
        Ok(resolved) => resolved,
        // Dangling link: create the file it names.
        Err(_) => {
            let link = fs::read_link(destination).map_err(|e| with_path(e, destination))?;
            match destination.parent() {
                Some(dir) if link.is_relative() => dir.join(link),
                _ => link,
            }
        }
    };
    debug!("Destination {:?} is a symlink to {:?}", destination, target);
    Ok(target)
}

/// Appends `path` to the error message, keeping the error kind.
fn with_path(err: io::Error, path: &Path) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {}", err, path.display()))
}
