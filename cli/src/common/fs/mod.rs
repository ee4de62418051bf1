//! # imgcopy Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the copy command, split into:
//!
//! - **`copy`**: The copy-with-metadata primitive (`copy_file_with_metadata`),
//!   which stages the data in a temp file and renames it into place.
//! - **`paths`**: Turning raw path strings into the paths actually used
//!   (`expand_tilde`, `make_absolute`, `resolve_destination`).
//!
//! Callers import from the specific submodule, e.g.
//! `use crate::common::fs::copy::copy_file_with_metadata;`.
//!

/// The copy-with-metadata primitive.
pub mod copy;
/// Path expansion and resolution helpers.
pub mod paths;
