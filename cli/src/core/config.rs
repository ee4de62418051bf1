//! # imgcopy Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the optional TOML configuration that
//! can override the built-in copy presets.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence, highest first):
//! 1. Command-line flags (applied by the copy command, not here)
//! 2. Project-specific `.imgcopy.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/imgcopy/config.toml`
//! 4. The selected preset
//!
//! Every field is optional, so a file only needs the keys it overrides:
//!
//! ```toml
//! [copy]
//! preset = "import"
//! source = "~/Downloads/headshot.jpg"
//! destination = "client/public/images/headshot.jpg"
//! check_source = true
//! absolute_destination = false
//! style = "verbose"
//! ```
//!
//! Paths are expanded (`~` to the home directory) and validated before use.
//! Relative `source` and `destination` values are relative to the directory of
//! the file that sets them, not to the directory imgcopy runs in.
//!
use crate::core::error::{ImgcopyError, Result};
use crate::core::preset::{MessageStyle, Preset};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub copy: CopyConfig,
}

/// Overrides for the copy job. `None` means "keep what the lower layer says".
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CopyConfig {
    /// Preset to start from when none is given on the command line.
    pub preset: Option<Preset>,
    /// Source file path (can use ~). Will be expanded.
    pub source: Option<String>,
    /// Destination file path (can use ~). Will be expanded.
    pub destination: Option<String>,
    pub check_source: Option<bool>,
    pub absolute_destination: Option<bool>,
    pub style: Option<MessageStyle>,
}

const PROJECT_CONFIG_FILENAME: &str = ".imgcopy.toml";

/// Loads the merged user and project configuration.
///
/// Missing files are not an error; unreadable or malformed ones are.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "imgcopy", "imgcopy") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().map_err(|e| {
        anyhow!(ImgcopyError::FileSystem(format!(
            "Failed to get current directory: {}",
            e
        )))
    })?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.imgcopy.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.imgcopy.toml`, stopping at
/// the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    if let Some(base) = path.parent() {
        anchor_relative_paths(&mut config, base);
    }
    Ok(config)
}

/// Resolves relative `source`/`destination` values against `base`, the
/// directory holding the config file they came from.
fn anchor_relative_paths(config: &mut Config, base: &Path) {
    for path in [&mut config.copy.source, &mut config.copy.destination]
        .into_iter()
        .flatten()
    {
        // Empty values are left for `validate_config` to reject.
        if path.is_empty() {
            continue;
        }
        let expanded = PathBuf::from(shellexpand::tilde(path.as_str()).into_owned());
        if expanded.is_relative() {
            *path = base.join(expanded).to_string_lossy().into_owned();
            debug!("Anchored configured path to {}", path);
        }
    }
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p.copy,
        None => return user,
    };
    let user = user.copy;
    Config {
        copy: CopyConfig {
            preset: project.preset.or(user.preset),
            source: project.source.or(user.source),
            destination: project.destination.or(user.destination),
            check_source: project.check_source.or(user.check_source),
            absolute_destination: project.absolute_destination.or(user.absolute_destination),
            style: project.style.or(user.style),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    for path in [&mut config.copy.source, &mut config.copy.destination]
        .into_iter()
        .flatten()
    {
        *path = shellexpand::tilde(path.as_str()).into_owned();
        debug!("Expanded configured path: {}", path);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.copy.source.as_deref() == Some("") {
        return Err(anyhow!(ImgcopyError::Config(
            "copy.source must not be empty".to_string()
        )));
    }
    if config.copy.destination.as_deref() == Some("") {
        return Err(anyhow!(ImgcopyError::Config(
            "copy.destination must not be empty".to_string()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [copy]
            preset = "import"
            source = "~/Downloads/a.jpg"
            destination = "/srv/site/images/a.jpg"
            check_source = true
            style = "terse"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.copy.preset, Some(Preset::Import));
        assert_eq!(config.copy.source.as_deref(), Some("~/Downloads/a.jpg")); // Not yet expanded
        assert_eq!(
            config.copy.destination.as_deref(),
            Some("/srv/site/images/a.jpg")
        );
        assert_eq!(config.copy.check_source, Some(true));
        assert_eq!(config.copy.absolute_destination, None);
        assert_eq!(config.copy.style, Some(MessageStyle::Terse));
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").expect("Failed to parse TOML");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[copy]\nretries = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            copy: CopyConfig {
                source: Some("/user/a.jpg".into()),
                destination: Some("/user/out.jpg".into()),
                style: Some(MessageStyle::Verbose),
                ..Default::default()
            },
        };
        let project = Config {
            copy: CopyConfig {
                destination: Some("/project/out.jpg".into()),
                check_source: Some(true),
                ..Default::default()
            },
        };

        let merged = merge_configs(user, Some(project));

        assert_eq!(merged.copy.source.as_deref(), Some("/user/a.jpg"));
        assert_eq!(merged.copy.destination.as_deref(), Some("/project/out.jpg"));
        assert_eq!(merged.copy.check_source, Some(true));
        assert_eq!(merged.copy.style, Some(MessageStyle::Verbose));
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            copy: CopyConfig {
                source: Some("~/a.jpg".into()),
                destination: Some("/absolute/b.jpg".into()),
                ..Default::default()
            },
        };

        expand_config_paths(&mut config);

        let expected = shellexpand::tilde("~/a.jpg").into_owned();
        assert_eq!(config.copy.source.as_deref(), Some(expected.as_str()));
        assert_eq!(config.copy.destination.as_deref(), Some("/absolute/b.jpg")); // Absolute path unchanged
    }

    #[test]
    fn test_validate_config_empty_source() {
        let config = Config {
            copy: CopyConfig {
                source: Some(String::new()),
                ..Default::default()
            },
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("copy.source must not be empty"));
    }

    #[test]
    fn test_validate_config_valid() {
        let config = Config {
            copy: CopyConfig {
                source: Some("/tmp/a.jpg".into()),
                destination: Some("/tmp/out/a.jpg".into()),
                ..Default::default()
            },
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join(".git")).unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let nested = root.path().join("client/public");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_project_config_path(&nested),
            Some(root.path().join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_find_project_config_stops_at_git_root() {
        let outer = tempdir().unwrap();
        fs::write(outer.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = outer.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }

    #[test]
    fn test_relative_paths_anchor_to_config_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(
            &path,
            "[copy]\nsource = \"shots/a.png\"\ndestination = \"/abs/out.png\"\n",
        )
        .unwrap();

        let config = load_config_from_path(&path).unwrap();

        let expected = dir.path().join("shots/a.png");
        assert_eq!(
            config.copy.source.as_deref(),
            Some(expected.to_string_lossy().as_ref())
        );
        assert_eq!(config.copy.destination.as_deref(), Some("/abs/out.png"));
    }

    #[test]
    fn test_empty_path_survives_anchoring_for_validation() {
        let mut config = Config {
            copy: CopyConfig {
                source: Some(String::new()),
                ..Default::default()
            },
        };

        anchor_relative_paths(&mut config, Path::new("/project"));

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_config_from_path_reports_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&path, "[copy\nsource = ").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
