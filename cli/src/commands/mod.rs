//! # imgcopy Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! imgcopy has a single command, so its arguments are flattened straight into
//! the top-level parser in `main.rs`. The command defines its own arguments
//! structure (`CopyArgs`) and handler (`handle_copy`).
//!

/// The copy operation: assemble the job, copy, report the outcome.
pub mod copy;
