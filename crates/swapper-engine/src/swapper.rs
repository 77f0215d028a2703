//! Swapper
//!
//! Connects the reorder engine and the customization menu to a host.
//!
//! - Every refresh tick: promote preferred actions, unless a menu is open.
//! - Menu opened with shift held over the container: add controls for
//!   both contexts, computed against the same original snapshot.
//! - Control activated: run its preference command.

use std::sync::Arc;

use parking_lot::RwLock;
use swapper_core::{Action, ActionList, ClickKind, Context, SwapperConfig};

use crate::commit::commit;
use crate::host::MenuHost;
use crate::menu::{insert_controls, CustomizationMenuBuilder};
use crate::notify::Notifier;
use crate::reorder::ReorderEngine;
use crate::store::PreferenceStore;

/// Entry point for host event hooks.
pub struct Swapper {
    config: RwLock<SwapperConfig>,
    store: Arc<PreferenceStore>,
    notifier: Arc<dyn Notifier>,
}

impl Swapper {
    pub fn new(
        config: SwapperConfig,
        store: Arc<PreferenceStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config: RwLock::new(config),
            store,
            notifier,
        }
    }

    /// Get the preference store (shared Arc).
    pub fn store(&self) -> Arc<PreferenceStore> {
        self.store.clone()
    }

    pub fn config(&self) -> SwapperConfig {
        *self.config.read()
    }

    /// Replace the configuration switches.
    pub fn set_config(&self, config: SwapperConfig) {
        *self.config.write() = config;
        tracing::debug!("Config updated: {:?}", config);
    }

    pub fn start_up(&self) {
        tracing::info!("Menu swapper started");
    }

    pub fn shut_down(&self) {
        tracing::info!("Menu swapper shut down");
    }

    /// Refresh tick. Returns the number of swaps reported to the host.
    pub fn on_client_tick(&self, host: &mut dyn MenuHost) -> usize {
        // Open menus are not rebuilt, so swapping now would repeat every tick
        if !host.is_logged_in() || host.is_menu_open() {
            return 0;
        }

        let click = ClickKind::from_shift(host.is_shift_held());
        let list = host.action_list();
        let engine = ReorderEngine::new(&self.store, self.config());

        let mut swaps = 0;
        engine.apply(list, click, |changed| {
            swaps += 1;
            host.replace_action_list(changed.clone());
        });
        swaps
    }

    /// Menu opened. Returns the list to display.
    pub fn on_menu_opened(&self, host: &dyn MenuHost, list: ActionList) -> ActionList {
        if !host.is_container_open() || !host.is_shift_held() {
            return list;
        }

        let builder = CustomizationMenuBuilder::new(&self.store, self.config());
        let mut controls = Vec::new();
        for context in Context::ALL {
            match builder.controls(&list, context) {
                Ok(built) => controls.extend(built),
                Err(e) => tracing::warn!("Not customizing {:?} menu: {}", context, e),
            }
        }
        insert_controls(list, controls)
    }

    /// Run the command bound to `action`, if any.
    ///
    /// Returns true when a command ran.
    pub fn activate(&self, action: &Action) -> bool {
        let Some(command) = &action.on_activate else {
            return false;
        };
        commit(command, &self.store, self.notifier.as_ref());
        true
    }
}
