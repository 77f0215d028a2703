//! Click preference storage.
//!
//! A preference maps (context, click kind, canonical item id) to the slot
//! index the user picked. Keys are `<prefix><canonical id>` in the
//! `bankmenuentryswapper` group:
//!
//! | context   | left              | shift                   |
//! |-----------|-------------------|-------------------------|
//! | Main      | `bank_`           | `bank_shift_`           |
//! | Secondary | `bank_inventory_` | `bank_inventory_shift_` |
//!
//! Slot indices are plain offsets into the list they were recorded from.
//! They are not revalidated when the host later builds a list of a
//! different shape.

use std::sync::Arc;

use swapper_core::{ClickKind, Context, ItemId, PreferenceError};

use crate::backend::{ConfigBackend, MemoryBackend};
use crate::canonical::{Canonicalize, Identity};

/// Config group all preference keys live in.
pub const CONFIG_GROUP: &str = "bankmenuentryswapper";

/// Key prefix for a (context, click kind) namespace.
pub fn key_prefix(context: Context, click: ClickKind) -> &'static str {
    match (context, click) {
        (Context::Main, ClickKind::Left) => "bank_",
        (Context::Main, ClickKind::Shift) => "bank_shift_",
        (Context::Secondary, ClickKind::Left) => "bank_inventory_",
        (Context::Secondary, ClickKind::Shift) => "bank_inventory_shift_",
    }
}

/// Preferred slot per (context, click kind, canonical item id).
pub struct PreferenceStore {
    backend: Arc<dyn ConfigBackend>,
    canonicalizer: Arc<dyn Canonicalize>,
}

impl PreferenceStore {
    pub fn new(backend: Arc<dyn ConfigBackend>, canonicalizer: Arc<dyn Canonicalize>) -> Self {
        Self {
            backend,
            canonicalizer,
        }
    }

    /// A store backed by memory with no variant collapsing.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()), Arc::new(Identity))
    }

    /// Storage key for an item, after canonicalization.
    pub fn key(&self, context: Context, click: ClickKind, item_id: ItemId) -> String {
        let canonical = self.canonicalizer.canonicalize(item_id);
        format!("{}{}", key_prefix(context, click), canonical)
    }

    /// Read the preferred slot.
    ///
    /// Returns `Ok(None)` when unset and an error when the stored value is
    /// not a slot index.
    pub fn get(
        &self,
        context: Context,
        click: ClickKind,
        item_id: ItemId,
    ) -> Result<Option<usize>, PreferenceError> {
        let key = self.key(context, click, item_id);
        let Some(value) = self.backend.get(CONFIG_GROUP, &key) else {
            return Ok(None);
        };
        value
            .parse::<usize>()
            .map(Some)
            .map_err(|_| PreferenceError::Malformed { key, value })
    }

    /// Store the preferred slot, replacing any previous one.
    pub fn set(&self, context: Context, click: ClickKind, item_id: ItemId, slot: usize) {
        let key = self.key(context, click, item_id);
        tracing::debug!("Setting {} = {}", key, slot);
        self.backend.set(CONFIG_GROUP, &key, &slot.to_string());
    }

    /// Remove the preferred slot. No-op when unset.
    pub fn unset(&self, context: Context, click: ClickKind, item_id: ItemId) {
        let key = self.key(context, click, item_id);
        tracing::debug!("Unsetting {}", key);
        self.backend.unset(CONFIG_GROUP, &key);
    }
}
