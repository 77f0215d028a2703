//! Scenario replay against a simulated host.
//!
//! ```json
//! {
//!   "actions": [
//!     { "label": "Cancel", "item_id": -1 },
//!     { "label": "Withdraw-5", "subject_name": "Coins", "item_id": 995,
//!       "kind": "low_priority", "context": "main" }
//!   ],
//!   "events": [
//!     { "type": "open_menu", "shift": true },
//!     { "type": "activate", "label": "Swap shift click Withdraw-5" },
//!     { "type": "tick", "shift": true }
//!   ]
//! }
//! ```

use serde::Deserialize;

use swapper_engine::{ActionList, MenuHost, Swapper};

use crate::error::CliError;

/// One host event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Refresh tick with the given modifier state.
    Tick {
        #[serde(default)]
        shift: bool,
    },
    /// The user opens the menu.
    OpenMenu {
        #[serde(default)]
        shift: bool,
    },
    /// The user picks an entry from the open menu.
    Activate { label: String },
}

/// The list the host builds for the clicked item, plus what happens next.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub actions: ActionList,
    pub events: Vec<Event>,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Host that rebuilds the same list on every tick.
pub struct SimulatedHost {
    base: ActionList,
    displayed: ActionList,
    shift: bool,
    menu_open: bool,
}

impl SimulatedHost {
    pub fn new(base: ActionList) -> Self {
        Self {
            displayed: base.clone(),
            base,
            shift: false,
            menu_open: false,
        }
    }
}

impl MenuHost for SimulatedHost {
    fn is_logged_in(&self) -> bool {
        true
    }

    fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    fn is_shift_held(&self) -> bool {
        self.shift
    }

    fn is_container_open(&self) -> bool {
        true
    }

    fn action_list(&self) -> ActionList {
        self.displayed.clone()
    }

    fn replace_action_list(&mut self, list: ActionList) {
        self.displayed = list;
    }
}

/// Run every event and describe the menu after each one.
pub fn replay(swapper: &Swapper, scenario: &Scenario) -> Result<Vec<String>, CliError> {
    let mut host = SimulatedHost::new(scenario.actions.clone());
    let mut lines = Vec::with_capacity(scenario.events.len());

    for event in &scenario.events {
        let step = match event {
            Event::Tick { shift } => {
                host.shift = *shift;
                if !host.menu_open {
                    // Fresh rebuild
                    host.displayed = host.base.clone();
                }
                let swaps = swapper.on_client_tick(&mut host);
                format!("tick{} ({} swaps)", modifier(*shift), swaps)
            }
            Event::OpenMenu { shift } => {
                host.shift = *shift;
                let menu = swapper.on_menu_opened(&host, host.displayed.clone());
                host.displayed = menu;
                host.menu_open = true;
                format!("open{}", modifier(*shift))
            }
            Event::Activate { label } => {
                let action = host
                    .displayed
                    .find(label)
                    .cloned()
                    .ok_or_else(|| CliError::UnknownAction(label.clone()))?;
                let committed = swapper.activate(&action);
                if !committed {
                    tracing::warn!("'{}' carries no preference command", label);
                }
                host.menu_open = false;
                host.displayed = host.base.clone();
                if committed {
                    format!("activate '{}'", label)
                } else {
                    format!("activate '{}' (no command)", label)
                }
            }
        };
        tracing::debug!("{}", step);
        lines.push(format!("{}: {}", step, host.displayed.labels().join(" | ")));
    }

    Ok(lines)
}

fn modifier(shift: bool) -> &'static str {
    if shift {
        "+shift"
    } else {
        ""
    }
}
