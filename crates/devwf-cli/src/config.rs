//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables (`DEVWF_` prefix, `__` as section separator,
//!    e.g. `DEVWF_PATHS__OUTPUT_DIR=.`)
//! 2. Config file (`--config` path, else the default location)
//! 3. Built-in defaults (always present)
//!
//! The paths section defaults to the original toolkit layout: templates in
//! `project-templates/`, the shared framework in `.bmad-core/`, and new
//! projects created next to the toolkit checkout (`..`). Relative paths are
//! resolved against the current working directory at use time.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use devwf_core::domain::{FRAMEWORK_DIR_NAME, TEMPLATES_DIR_NAME};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Where templates, the framework, and new projects live.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Directory containing the bundled template trees.
    pub templates_dir: PathBuf,
    /// Shared workflow-framework directory copied into new projects.
    pub framework_dir: PathBuf,
    /// Directory new projects are created under.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                templates_dir: PathBuf::from(TEMPLATES_DIR_NAME),
                framework_dir: PathBuf::from(FRAMEWORK_DIR_NAME),
                output_dir: PathBuf::from(".."),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults ← file ← environment.
    ///
    /// `config_file` is the path the user passed via `--config`; when given
    /// it must exist. Without it, the default location is merged only if
    /// present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .set_default("paths.templates_dir", TEMPLATES_DIR_NAME)?
            .set_default("paths.framework_dir", FRAMEWORK_DIR_NAME)?
            .set_default("paths.output_dir", "..")?
            .set_default("output.no_color", false)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.clone())),
            None => builder.add_source(File::from(Self::config_path()).required(false)),
        };

        builder = builder.add_source(Environment::with_prefix("DEVWF").separator("__"));

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.devwf.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "devwf", "devwf")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".devwf.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_toolkit_layout() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths.templates_dir, PathBuf::from("project-templates"));
        assert_eq!(cfg.paths.framework_dir, PathBuf::from(".bmad-core"));
        assert_eq!(cfg.paths.output_dir, PathBuf::from(".."));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        // No config file at the default location in CI; env unset.
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.paths.templates_dir, PathBuf::from("project-templates"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/devwf.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
