//! # imgcopy Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure used by the copy command:
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//! - `preset`: The built-in copy jobs and their hardcoded paths
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{CopyError, Result}; // For error handling
//! use crate::core::preset::Preset; // For the built-in jobs
//! ```
//!
pub mod config;
pub mod error;
pub mod preset;
