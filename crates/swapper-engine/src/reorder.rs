//! Per-refresh promotion of preferred actions.
//!
//! The host rebuilds its action list on every refresh, so the swap has to
//! be reapplied every time. It must not run while a menu is open: open
//! menus are not rebuilt and reapplying would keep swapping entries.

use swapper_core::{Action, ActionList, ClickKind, Context, SwapperConfig};

use crate::resolver::is_eligible;
use crate::store::PreferenceStore;

/// Moves the action whose stored slot matches its position to the end of
/// the list.
pub struct ReorderEngine<'a> {
    store: &'a PreferenceStore,
    config: SwapperConfig,
}

impl<'a> ReorderEngine<'a> {
    pub fn new(store: &'a PreferenceStore, config: SwapperConfig) -> Self {
        Self { store, config }
    }

    /// Apply preferences for every enabled context.
    ///
    /// Each action is looked up in its own context. `on_change` is called
    /// after every swap with the list as it stands, so a cycle may report
    /// several changes.
    pub fn apply<F>(&self, list: ActionList, click: ClickKind, on_change: F) -> ActionList
    where
        F: FnMut(&ActionList),
    {
        self.scan(list, click, |action| action.context, on_change)
    }

    /// Apply preferences for actions belonging to `context` only.
    pub fn apply_in<F>(
        &self,
        list: ActionList,
        context: Context,
        click: ClickKind,
        on_change: F,
    ) -> ActionList
    where
        F: FnMut(&ActionList),
    {
        self.scan(list, click, |_| Some(context), on_change)
    }

    fn scan<C, F>(
        &self,
        mut list: ActionList,
        click: ClickKind,
        context_of: C,
        mut on_change: F,
    ) -> ActionList
    where
        C: Fn(&Action) -> Option<Context>,
        F: FnMut(&ActionList),
    {
        let Some(last) = list.last_index() else {
            return list;
        };

        for index in 0..list.len() {
            let Some(action) = list.get(index) else {
                break;
            };
            let Some(context) = context_of(action) else {
                continue;
            };
            if !self.config.is_enabled(context) || !is_eligible(action, context) {
                continue;
            }

            let slot = match self.store.get(context, click, action.item_id) {
                Ok(Some(slot)) => slot,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!("Skipping '{}': {}", action.label, e);
                    continue;
                }
            };

            // Already the default action
            if slot != index || index == last {
                continue;
            }

            tracing::debug!(
                "Promoting '{}' from slot {} ({:?} click)",
                action.label,
                index,
                click
            );
            list.promote(index);
            on_change(&list);
        }

        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use swapper_core::{ActionKind, ItemId};

    use crate::backend::{ConfigBackend, MemoryBackend};
    use crate::canonical::Identity;
    use crate::store::CONFIG_GROUP;

    const COINS: i32 = 995;

    fn bank(label: &str) -> Action {
        Action::new(label, "Coins", COINS, ActionKind::LowPriority, Context::Main)
    }

    fn withdraw_list() -> ActionList {
        ActionList::new(vec![
            Action::unscoped("Cancel"),
            bank("Examine"),
            bank("Withdraw-All"),
            bank("Withdraw-X"),
            bank("Withdraw-10"),
            bank("Withdraw-5"),
            bank("Withdraw-1"),
        ])
    }

    fn apply_counting(
        engine: &ReorderEngine<'_>,
        list: ActionList,
        click: ClickKind,
    ) -> (ActionList, usize) {
        let mut changes = 0;
        let list = engine.apply(list, click, |_| changes += 1);
        (list, changes)
    }

    #[test]
    fn test_promotes_preferred_slot() {
        let store = PreferenceStore::in_memory();
        store.set(Context::Main, ClickKind::Left, ItemId(COINS), 5);
        let engine = ReorderEngine::new(&store, SwapperConfig::default());

        let (list, changes) = apply_counting(&engine, withdraw_list(), ClickKind::Left);

        assert_eq!(changes, 1);
        assert_eq!(list.last().map(|a| a.label.as_str()), Some("Withdraw-5"));
        assert_eq!(list.last().map(|a| a.kind), Some(ActionKind::Primary));
        assert_eq!(list.get(5).map(|a| a.label.as_str()), Some("Withdraw-1"));
    }

    #[test]
    fn test_click_kind_selects_namespace() {
        let store = PreferenceStore::in_memory();
        store.set(Context::Main, ClickKind::Shift, ItemId(COINS), 2);
        let engine = ReorderEngine::new(&store, SwapperConfig::default());

        let (unchanged, changes) = apply_counting(&engine, withdraw_list(), ClickKind::Left);
        assert_eq!(changes, 0);
        assert_eq!(unchanged, withdraw_list());

        let (list, changes) = apply_counting(&engine, withdraw_list(), ClickKind::Shift);
        assert_eq!(changes, 1);
        assert_eq!(list.last().map(|a| a.label.as_str()), Some("Withdraw-All"));
    }

    #[test]
    fn test_last_slot_is_noop() {
        let store = PreferenceStore::in_memory();
        store.set(Context::Main, ClickKind::Left, ItemId(COINS), 6);
        let engine = ReorderEngine::new(&store, SwapperConfig::default());

        let (list, changes) = apply_counting(&engine, withdraw_list(), ClickKind::Left);

        assert_eq!(changes, 0);
        assert_eq!(list, withdraw_list());
    }

    #[test]
    fn test_examine_and_unscoped_are_never_promoted() {
        let store = PreferenceStore::in_memory();
        store.set(Context::Main, ClickKind::Left, ItemId(COINS), 1);
        store.set(Context::Main, ClickKind::Left, ItemId(-1), 0);
        let engine = ReorderEngine::new(&store, SwapperConfig::default());

        let (_, changes) = apply_counting(&engine, withdraw_list(), ClickKind::Left);
        assert_eq!(changes, 0);
    }

    #[test]
    fn test_disabled_context_is_untouched() {
        let store = PreferenceStore::in_memory();
        store.set(Context::Main, ClickKind::Left, ItemId(COINS), 3);
        let config = SwapperConfig {
            container_customization: false,
            list_customization: true,
        };
        let engine = ReorderEngine::new(&store, config);

        let (list, changes) = apply_counting(&engine, withdraw_list(), ClickKind::Left);
        assert_eq!(changes, 0);
        assert_eq!(list, withdraw_list());

        let list = engine.apply_in(withdraw_list(), Context::Main, ClickKind::Left, |_| {});
        assert_eq!(list, withdraw_list());
    }

    #[test]
    fn test_malformed_preference_skips_entry() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set(CONFIG_GROUP, "bank_995", "x");
        let store = PreferenceStore::new(backend, Arc::new(Identity));
        let engine = ReorderEngine::new(&store, SwapperConfig::default());

        let (list, changes) = apply_counting(&engine, withdraw_list(), ClickKind::Left);
        assert_eq!(changes, 0);
        assert_eq!(list, withdraw_list());
    }

    #[test]
    fn test_multiple_swaps_in_one_cycle() {
        // Two items share the list; both have a preference for their own slot.
        let store = PreferenceStore::in_memory();
        store.set(Context::Secondary, ClickKind::Left, ItemId(1), 0);
        store.set(Context::Secondary, ClickKind::Left, ItemId(2), 1);
        let engine = ReorderEngine::new(&store, SwapperConfig::default());
        let list = ActionList::new(vec![
            Action::new("Eat", "Shark", 1, ActionKind::Other, Context::Secondary),
            Action::new("Drop", "Lobster", 2, ActionKind::Other, Context::Secondary),
            Action::new("Deposit-1", "Coins", 3, ActionKind::Other, Context::Secondary),
        ]);

        let mut seen = Vec::new();
        let list = engine.apply(list, ClickKind::Left, |l| {
            seen.push(l.labels().join(","));
        });

        assert_eq!(
            seen,
            vec![
                "Deposit-1,Drop,Eat".to_string(),
                "Deposit-1,Eat,Drop".to_string(),
            ]
        );
        assert_eq!(list.labels(), vec!["Deposit-1", "Eat", "Drop"]);
    }

    #[test]
    fn test_apply_in_restricts_context() {
        let store = PreferenceStore::in_memory();
        store.set(Context::Main, ClickKind::Left, ItemId(COINS), 4);
        let engine = ReorderEngine::new(&store, SwapperConfig::default());

        let list = engine.apply_in(withdraw_list(), Context::Secondary, ClickKind::Left, |_| {});
        assert_eq!(list, withdraw_list());

        let list = engine.apply_in(withdraw_list(), Context::Main, ClickKind::Left, |_| {});
        assert_eq!(list.last().map(|a| a.label.as_str()), Some("Withdraw-10"));
    }
}
