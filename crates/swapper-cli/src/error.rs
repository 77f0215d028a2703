//! Error types for the replay binary.

use std::path::PathBuf;
use thiserror::Error;

use swapper_core::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("Failed to read {path:?}: {error}")]
    Read { path: PathBuf, error: String },

    /// Scenario or variation table is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config or preference file error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// An activate step named a label that is not on screen.
    #[error("No action labelled '{0}' in the current menu")]
    UnknownAction(String),
}
