//! Configuration types.
//!
//! The two switches live in `config.toml` under the swapper config
//! directory. A missing file means both contexts are enabled.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::error::ConfigError;

/// Runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapperConfig {
    /// Allow customization of left/shift clicks on container items.
    #[serde(default = "enabled")]
    pub container_customization: bool,

    /// Allow customization of left/shift clicks on items in the adjacent list.
    #[serde(default = "enabled")]
    pub list_customization: bool,
}

fn enabled() -> bool {
    true
}

impl Default for SwapperConfig {
    fn default() -> Self {
        Self {
            container_customization: true,
            list_customization: true,
        }
    }
}

impl SwapperConfig {
    /// Whether customization is switched on for `context`.
    pub fn is_enabled(&self, context: Context) -> bool {
        match context {
            Context::Main => self.container_customization,
            Context::Secondary => self.list_customization,
        }
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&path)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("menu-swapper"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Get the path to the stored click preferences.
pub fn preferences_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("preferences.toml"))
}

/// Ensure the config directory exists.
pub fn ensure_config_dir() -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SwapperConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, SwapperConfig::default());
        assert!(config.is_enabled(Context::Main));
        assert!(config.is_enabled(Context::Secondary));
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "container_customization = false\n").unwrap();

        let config = SwapperConfig::load_from(&path).unwrap();
        assert!(!config.is_enabled(Context::Main));
        assert!(config.is_enabled(Context::Secondary));
    }

    #[test]
    fn test_serialized_config_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = SwapperConfig {
            container_customization: true,
            list_customization: false,
        };

        std::fs::write(&path, toml::to_string(&config).unwrap()).unwrap();
        assert_eq!(SwapperConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "container_customization = \"yes\"\n").unwrap();

        assert!(matches!(
            SwapperConfig::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
