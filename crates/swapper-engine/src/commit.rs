//! Execution of preference commands bound to synthetic controls.

use swapper_core::{ClickKind, PreferenceCommand};

use crate::notify::{assigned_message, reset_message, Notifier};
use crate::store::PreferenceStore;

/// Perform the store write for `command` and confirm it to the user.
pub fn commit(command: &PreferenceCommand, store: &PreferenceStore, notifier: &dyn Notifier) {
    match command {
        PreferenceCommand::Assign {
            context,
            click,
            item_id,
            slot,
            label,
            subject,
        } => {
            notifier.notify(&assigned_message(*click, subject, label));
            store.set(*context, *click, *item_id, *slot);
            tracing::info!(
                "Assigned {} click '{}' (slot {}) for item {}",
                click.as_str(),
                label,
                slot,
                item_id
            );
        }
        PreferenceCommand::Reset {
            context,
            item_id,
            subject,
        } => {
            notifier.notify(&reset_message(subject));
            store.unset(*context, ClickKind::Left, *item_id);
            store.unset(*context, ClickKind::Shift, *item_id);
            tracing::info!("Reset click preferences for item {}", item_id);
        }
    }
}
