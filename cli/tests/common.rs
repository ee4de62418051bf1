//! # imgcopy CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs the
//! compiled `imgcopy` binary inside a throwaway sandbox so that the user's real
//! home directory and config files never leak in.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory with its own `HOME` and config directory.
pub struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    /// Creates the sandbox. Layout:
    ///
    /// ```text
    /// <root>/home      HOME and XDG_CONFIG_HOME parent
    /// <root>/work      working directory, marked as a git root
    /// ```
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create sandbox dir");
        fs::create_dir_all(root.path().join("home/.config")).expect("Failed to create home");
        // `.git` stops the project config search from walking above the sandbox.
        fs::create_dir_all(root.path().join("work/.git")).expect("Failed to create work dir");
        Sandbox { root }
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn work(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// Writes `content` to `relative` under the working directory, creating parents.
    pub fn write(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.work().join(relative);
        write_file(&path, content);
        path
    }

    /// Writes `content` to `relative` under the sandbox home, creating parents.
    pub fn write_home(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.home().join(relative);
        write_file(&path, content);
        path
    }

    /// An `imgcopy` command running inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = imgcopy_cmd();
        cmd.current_dir(self.work())
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write sandbox file");
}

/// # Get imgcopy Command (`imgcopy_cmd`)
///
/// Creates an `assert_cmd::Command` pointing at the compiled `imgcopy` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn imgcopy_cmd() -> Command {
    Command::cargo_bin("imgcopy").expect("Failed to find imgcopy binary for testing")
}
