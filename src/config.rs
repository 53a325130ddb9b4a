//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `RSTREE_*` prefix

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::INDENT_INCREMENT;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("cannot render settings: {0}")]
    Render(#[from] toml::ser::Error),
}

/// How the binary prints a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One line per node, indented by depth
    #[default]
    Indent,
    /// Box-drawing tree
    Tree,
}

/// Unified configuration for rstree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Spaces per depth level for indented output (default: 2)
    pub indent_width: usize,
    /// Output style (default: indent)
    pub style: RenderStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent_width: INDENT_INCREMENT,
            style: RenderStyle::default(),
        }
    }
}

/// Get the XDG config directory for rstree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rstree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rstree.toml"))
}

impl Settings {
    /// Load settings with layered precedence, optionally from an explicit file.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_from(global_config_path().as_deref(), explicit)
    }

    /// Load settings from the given global and explicit files plus `RSTREE_*` env vars.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    #[instrument(level = "debug")]
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("indent_width", defaults.indent_width as u64)?
            .set_default("style", "indent")?;

        if let Some(global_path) = global {
            builder = builder.add_source(File::from(global_path.to_path_buf()).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("RSTREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.indent_width, 2);
        assert_eq!(settings.style, RenderStyle::Indent);
    }

    #[test]
    fn test_to_toml_lists_all_fields() {
        let rendered = Settings::default().to_toml().unwrap();
        assert!(rendered.contains("indent_width = 2"));
        assert!(rendered.contains("style = \"indent\""));
    }
}
