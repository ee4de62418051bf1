//! # imgcopy Path Helpers
//!
//! File: cli/src/common/fs/paths.rs
//!
//! ## Overview
//!
//! Small helpers that turn user-supplied path strings into the exact paths the
//! copy operates on:
//!
//! - **`expand_tilde`**: `~/Pictures/a.png` to `/home/me/Pictures/a.png`.
//! - **`make_absolute`**: joins a relative path onto the current directory.
//! - **`resolve_destination`**: when the destination is an existing directory,
//!   the file lands inside it under the source's file name.
//!
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or hosts without a resolvable home directory, are
/// returned unchanged.
pub fn expand_tilde(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

/// Resolves `path` against the current working directory.
///
/// Absolute paths are returned as-is. The filesystem is not consulted beyond
/// reading the working directory, so the path does not need to exist.
///
/// # Errors
///
/// Returns an `Err` if the current directory cannot be determined (for example
/// when it has been deleted).
pub fn make_absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    // Collecting the components drops any `.` segments left by the join.
    let resolved: PathBuf = cwd.join(path).components().collect();
    debug!("Resolved {:?} to {:?}", path, resolved);
    Ok(resolved)
}

/// Returns the file path the copy should write to.
///
/// If `destination` is an existing directory, the source's file name is
/// appended. Otherwise `destination` is used verbatim.
pub fn resolve_destination(source: &Path, destination: &Path) -> PathBuf {
    if destination.is_dir() {
        if let Some(name) = source.file_name() {
            let target = destination.join(name);
            debug!("Destination {:?} is a directory, writing to {:?}", destination, target);
            return target;
        }
    }
    destination.to_path_buf()
}
