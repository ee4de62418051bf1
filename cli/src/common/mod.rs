//! # imgcopy Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities that are not specific to a command. Today that is only
//! filesystem work; command logic lives in `commands::` and configuration and
//! errors in `core::`.
//!

/// Utilities for filesystem operations (copying, path resolution).
pub mod fs;
