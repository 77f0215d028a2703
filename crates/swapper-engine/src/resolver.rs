//! Slot resolution rules shared by the reorder engine and the menu builder.
//!
//! The list subject is the item of the last action, which is the action
//! the host currently runs on a plain click.

use swapper_core::{Action, ActionKind, ActionList, ClickKind, Context, ItemId, PreferenceError};

use crate::store::PreferenceStore;

/// Whether `action` can be customized within `context`.
///
/// "Examine" is never customizable. The container view only considers the
/// host's real menu operations; the adjacent list accepts any kind.
pub fn is_eligible(action: &Action, context: Context) -> bool {
    if action.context != Some(context) || action.label.eq_ignore_ascii_case("examine") {
        return false;
    }
    match context {
        Context::Main => matches!(action.kind, ActionKind::Primary | ActionKind::LowPriority),
        Context::Secondary => true,
    }
}

/// Single-unit actions stay customizable even from the ignored slot.
pub fn is_single_unit(label: &str) -> bool {
    label.ends_with("-1")
}

/// Slot that gets no controls: the stored shift slot if any, otherwise
/// the last index. None for an empty list.
pub fn ignore_index(list: &ActionList, shift_slot: Option<usize>) -> Option<usize> {
    shift_slot.or_else(|| list.last_index())
}

/// Everything the menu builder needs from one list and the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSnapshot {
    pub last_index: usize,
    pub ignore_index: usize,
    pub left_slot: Option<usize>,
    pub shift_slot: Option<usize>,
    pub left_label: Option<String>,
    pub shift_label: Option<String>,
}

/// Reads the subject's preferences and applies the tie-break rules.
pub struct SlotResolver<'a> {
    store: &'a PreferenceStore,
}

impl<'a> SlotResolver<'a> {
    pub fn new(store: &'a PreferenceStore) -> Self {
        Self { store }
    }

    /// Item whose preferences govern the list.
    pub fn subject(list: &ActionList) -> Option<ItemId> {
        list.last().map(|a| a.item_id)
    }

    fn stored(
        &self,
        list: &ActionList,
        context: Context,
        click: ClickKind,
    ) -> Result<Option<usize>, PreferenceError> {
        match Self::subject(list) {
            Some(item_id) => self.store.get(context, click, item_id),
            None => Ok(None),
        }
    }

    /// Stored shift slot for the subject.
    pub fn effective_shift_slot(
        &self,
        list: &ActionList,
        context: Context,
    ) -> Result<Option<usize>, PreferenceError> {
        self.stored(list, context, ClickKind::Shift)
    }

    /// Stored left slot for the subject, moved to the last index when it
    /// collides with the shift slot.
    pub fn effective_left_slot(
        &self,
        list: &ActionList,
        context: Context,
    ) -> Result<Option<usize>, PreferenceError> {
        let left = self.stored(list, context, ClickKind::Left)?;
        let shift = self.effective_shift_slot(list, context)?;
        Ok(break_tie(list, left, shift))
    }

    /// Label at the effective left slot.
    pub fn effective_left_label(
        &self,
        list: &ActionList,
        context: Context,
    ) -> Result<Option<String>, PreferenceError> {
        let slot = self.effective_left_slot(list, context)?;
        Ok(left_label(list, slot))
    }

    /// Label of the last action, which a shift preference always promotes into.
    pub fn effective_shift_label(
        &self,
        list: &ActionList,
        context: Context,
    ) -> Result<Option<String>, PreferenceError> {
        let slot = self.effective_shift_slot(list, context)?;
        Ok(shift_label(list, slot))
    }

    /// Resolve everything at once with two store reads.
    ///
    /// Returns None for an empty list.
    pub fn resolve(
        &self,
        list: &ActionList,
        context: Context,
    ) -> Result<Option<SlotSnapshot>, PreferenceError> {
        let Some(last_index) = list.last_index() else {
            return Ok(None);
        };
        let shift_slot = self.stored(list, context, ClickKind::Shift)?;
        let stored_left = self.stored(list, context, ClickKind::Left)?;
        let left_slot = break_tie(list, stored_left, shift_slot);

        Ok(Some(SlotSnapshot {
            last_index,
            ignore_index: ignore_index(list, shift_slot).unwrap_or(last_index),
            left_slot,
            shift_slot,
            left_label: left_label(list, left_slot),
            shift_label: shift_label(list, shift_slot),
        }))
    }
}

fn break_tie(list: &ActionList, left: Option<usize>, shift: Option<usize>) -> Option<usize> {
    match (left, shift) {
        (Some(l), Some(s)) if l == s => list.last_index(),
        _ => left,
    }
}

fn left_label(list: &ActionList, slot: Option<usize>) -> Option<String> {
    slot.and_then(|i| list.get(i)).map(|a| a.label.clone())
}

fn shift_label(list: &ActionList, slot: Option<usize>) -> Option<String> {
    slot.and_then(|_| list.last()).map(|a| a.label.clone())
}
