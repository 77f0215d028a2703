//! Interface presented by the host client.

use swapper_core::ActionList;

/// The host that owns the action list and its rebuild cadence.
///
/// The list is handed over by value on every call; nothing here keeps
/// it between refresh cycles.
#[cfg_attr(test, mockall::automock)]
pub trait MenuHost {
    /// Whether a session is active. Refresh ticks are ignored otherwise.
    fn is_logged_in(&self) -> bool;

    /// Whether the action menu is currently displayed.
    fn is_menu_open(&self) -> bool;

    /// Whether the shift modifier is held.
    fn is_shift_held(&self) -> bool;

    /// Whether the container view is on screen.
    fn is_container_open(&self) -> bool;

    /// The action list built for the current refresh cycle.
    fn action_list(&self) -> ActionList;

    /// Replace the host's action list.
    fn replace_action_list(&mut self, list: ActionList);
}
