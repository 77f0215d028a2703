//! Preference-driven menu entry reordering.
//!
//! This crate provides:
//! - `PreferenceStore` over a pluggable `ConfigBackend` (memory or TOML file)
//! - Item variant canonicalization
//! - Slot resolution rules shared by both engines
//! - `ReorderEngine` - promotes the preferred action on every refresh
//! - `CustomizationMenuBuilder` - synthesizes "swap" and "reset" controls
//! - `Swapper` - wires both engines to a `MenuHost`
//!
//! ## Flow
//!
//! ```text
//! host refresh tick ──► ReorderEngine ──► replace_action_list()
//!                             ▲
//!                      PreferenceStore
//!                             │
//! host menu opened ──► CustomizationMenuBuilder ──► controls + originals
//!                                                        │
//!                      user activates a control ◄────────┘
//!                             │
//!                             ▼
//!                      commit() ──► PreferenceStore + Notifier
//! ```

pub mod backend;
pub mod canonical;
pub mod commit;
pub mod host;
pub mod menu;
pub mod notify;
pub mod reorder;
pub mod resolver;
pub mod store;
pub mod swapper;

// Re-export commonly used types
pub use backend::{ConfigBackend, FileBackend, MemoryBackend};
pub use canonical::{Canonicalize, Identity, VariationMap};
pub use commit::commit;
pub use host::MenuHost;
pub use menu::CustomizationMenuBuilder;
pub use notify::{LogNotifier, Notifier};
pub use reorder::ReorderEngine;
pub use resolver::{SlotResolver, SlotSnapshot};
pub use store::PreferenceStore;
pub use swapper::Swapper;

// Re-export swapper_core types for convenience
pub use swapper_core::{
    Action, ActionKind, ActionList, ClickKind, Context, ItemId, PreferenceCommand,
    PreferenceError, SwapperConfig,
};
