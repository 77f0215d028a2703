//! Customization menu: "swap" and "reset" controls for the opened item.
//!
//! ## Control generation
//!
//! ```text
//! for each action, last index down to 0:
//!     ignored slot and not "-1"?         -> skip
//!     not eligible for the context?      -> skip
//!     not the current left default?      -> "Swap left click <label>"
//!     not the current shift default?     -> "Swap shift click <label>"
//! any eligible action seen?              -> "Reset swap" (topmost item)
//! ```
//!
//! Controls are inserted at the bottom of the list one by one, the same
//! way the host adds custom entries. The slot bound into each control
//! always refers to the list as it was before insertion.

use swapper_core::{
    Action, ActionList, ClickKind, Context, PreferenceCommand, PreferenceError, SwapperConfig,
};

use crate::resolver::{is_eligible, is_single_unit, SlotResolver};
use crate::store::PreferenceStore;

/// Label prefix of left-click controls.
pub const LEFT_CONTROL_PREFIX: &str = "Swap left click ";

/// Label prefix of shift-click controls.
pub const SHIFT_CONTROL_PREFIX: &str = "Swap shift click ";

/// Label of the reset control.
pub const RESET_LABEL: &str = "Reset swap";

/// Builds the synthetic controls shown while customizing.
pub struct CustomizationMenuBuilder<'a> {
    store: &'a PreferenceStore,
    config: SwapperConfig,
}

impl<'a> CustomizationMenuBuilder<'a> {
    pub fn new(store: &'a PreferenceStore, config: SwapperConfig) -> Self {
        Self { store, config }
    }

    /// Controls for `context`, in the order they are emitted.
    ///
    /// Empty when the context is switched off or the list is empty.
    pub fn controls(
        &self,
        list: &ActionList,
        context: Context,
    ) -> Result<Vec<Action>, PreferenceError> {
        if !self.config.is_enabled(context) {
            return Ok(Vec::new());
        }
        let Some(snapshot) = SlotResolver::new(self.store).resolve(list, context)? else {
            return Ok(Vec::new());
        };

        let mut controls = Vec::new();
        let mut topmost: Option<&Action> = None;

        for (index, action) in list.iter().enumerate().rev() {
            if index == snapshot.ignore_index && !is_single_unit(&action.label) {
                continue;
            }
            if !is_eligible(action, context) {
                continue;
            }

            let matches_left = snapshot.left_label.as_deref() == Some(action.label.as_str());
            let matches_shift = snapshot.shift_label.as_deref() == Some(action.label.as_str());

            if snapshot.left_slot.is_none() || !matches_left {
                // The current shift default already sits in the last slot
                let slot = match snapshot.shift_slot {
                    Some(shift) if matches_shift => shift,
                    _ => index,
                };
                controls.push(assign_control(context, ClickKind::Left, action, slot));
            }

            if snapshot.shift_slot.is_none() || !matches_shift {
                let slot = if snapshot.shift_slot == Some(index) {
                    snapshot.last_index
                } else {
                    index
                };
                controls.push(assign_control(context, ClickKind::Shift, action, slot));
            }

            topmost = Some(action);
        }

        if let Some(action) = topmost {
            controls.push(reset_control(context, action));
        }

        tracing::debug!(
            "Built {} customization controls for {:?}",
            controls.len(),
            context
        );
        Ok(controls)
    }

    /// Return `list` with the controls for `context` added.
    ///
    /// A malformed stored preference leaves the list unchanged.
    pub fn build(&self, list: ActionList, context: Context) -> ActionList {
        match self.controls(&list, context) {
            Ok(controls) => insert_controls(list, controls),
            Err(e) => {
                tracing::warn!("Not customizing {:?} menu: {}", context, e);
                list
            }
        }
    }
}

/// Insert controls at the bottom of the list in emission order.
pub fn insert_controls(mut list: ActionList, controls: Vec<Action>) -> ActionList {
    for control in controls {
        list.insert_bottom(control);
    }
    list
}

fn assign_control(context: Context, click: ClickKind, action: &Action, slot: usize) -> Action {
    let prefix = match click {
        ClickKind::Left => LEFT_CONTROL_PREFIX,
        ClickKind::Shift => SHIFT_CONTROL_PREFIX,
    };
    Action::control(
        format!("{}{}", prefix, action.label),
        action.subject_name.clone(),
        action.item_id,
        PreferenceCommand::Assign {
            context,
            click,
            item_id: action.item_id,
            slot,
            label: action.label.clone(),
            subject: action.subject_name.clone(),
        },
    )
}

fn reset_control(context: Context, action: &Action) -> Action {
    Action::control(
        RESET_LABEL,
        action.subject_name.clone(),
        action.item_id,
        PreferenceCommand::Reset {
            context,
            item_id: action.item_id,
            subject: action.subject_name.clone(),
        },
    )
}
