//! Core types for the menu entry swapper.
//!
//! This crate contains shared data structures that are used across all swapper crates:
//! - Action and ActionList types for one rebuild of a host menu
//! - Context and click kind discriminators
//! - Preference commands bound to synthetic controls
//! - Configuration types
//! - Error types

mod action;
mod config;
mod context;
mod error;
mod item;

pub use action::{Action, ActionKind, ActionList, PreferenceCommand};
pub use config::{
    config_dir, config_path, ensure_config_dir, preferences_path, SwapperConfig,
};
pub use context::{ClickKind, Context};
pub use error::{ConfigError, PreferenceError};
pub use item::ItemId;
