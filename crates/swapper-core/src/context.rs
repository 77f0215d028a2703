//! Customization scopes and click kinds.

use serde::{Deserialize, Serialize};

/// One of the two independent customization scopes.
///
/// Each context has its own preference namespace and its own
/// configuration switch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// The container view itself.
    Main,
    /// The item list shown next to the container.
    Secondary,
}

impl Context {
    /// Both contexts, in the order the menu builder visits them.
    pub const ALL: [Context; 2] = [Context::Main, Context::Secondary];
}

/// Which click a preference applies to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClickKind {
    /// Plain click.
    #[default]
    Left,
    /// Shift-modified click.
    Shift,
}

impl ClickKind {
    /// Click kind selected by the current modifier state.
    pub fn from_shift(shift_held: bool) -> Self {
        if shift_held {
            ClickKind::Shift
        } else {
            ClickKind::Left
        }
    }

    /// Lowercase name used in user-facing messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClickKind::Left => "left",
            ClickKind::Shift => "shift",
        }
    }
}
