//! Linker configuration management for `yalinker.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── page       # [page]
//! │   ├── rewrite    # [rewrite]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ValidationErrors
//! │   └── field      # FieldPath
//! └── mod.rs         # LinkerConfig (this file)
//! ```
//!
//! The config file is optional: without one every section takes its
//! defaults and context comes from the command line.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{PageConfig, RewriteConfig, SiteConfig};
pub use types::{ConfigError, FieldPath, InvalidValue, ValidationErrors};

use crate::{cli::Cli, debug, log};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "yalinker.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing yalinker.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkerConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Site location (url, root prefix)
    #[serde(default)]
    pub site: SiteConfig,

    /// Default page context (route, title)
    #[serde(default)]
    pub page: PageConfig,

    /// Document rewrite settings
    #[serde(default)]
    pub rewrite: RewriteConfig,
}

impl LinkerConfig {
    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` must exist; otherwise `yalinker.toml` is
    /// searched upward from cwd and defaults apply when none is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) if !path.exists() => {
                bail!("config file '{}' not found", path.display());
            }
            Some(path) => Self::from_path(path)?,
            None => match find_config_file(Path::new(DEFAULT_CONFIG_NAME)) {
                Some(path) => Self::from_path(&path)?,
                None => {
                    debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG_NAME);
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        debug!("config"; "loaded {}", path.display());
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate all sections, collecting every problem before failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = ValidationErrors::new();
        self.site.validate(&mut errors);
        self.page.validate(&mut errors);
        errors.into_result().map_err(ConfigError::Invalid)
    }

    /// Effective root prefix for page hrefs.
    #[inline]
    pub fn root_prefix(&self) -> String {
        self.site.root_prefix()
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> LinkerConfig {
    let (parsed, ignored) = LinkerConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
