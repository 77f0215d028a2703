//! Action-related types.

use serde::{Deserialize, Serialize};

use crate::context::{ClickKind, Context};
use crate::item::ItemId;

/// How the host classifies an action.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Real action the host may pick as the default.
    Primary,
    /// Real action the host never picks as the default on its own.
    LowPriority,
    /// Control generated by the customization menu.
    Synthetic,
    /// Anything else (e.g. "Cancel").
    #[default]
    Other,
}

/// Deferred preference write bound to a synthetic control.
///
/// Carries everything the write needs, so it stays valid after the
/// list it was built from has been discarded by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PreferenceCommand {
    /// Store `slot` as the default for `click`.
    Assign {
        context: Context,
        click: ClickKind,
        item_id: ItemId,
        slot: usize,
        /// Label of the action being promoted.
        label: String,
        /// Subject name shown in the confirmation.
        subject: String,
    },

    /// Remove both click preferences for the item.
    Reset {
        context: Context,
        item_id: ItemId,
        subject: String,
    },
}

/// One contextual action in a host menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Display text, e.g. "Withdraw-5".
    pub label: String,

    /// Display name of the item the action applies to.
    #[serde(default)]
    pub subject_name: String,

    /// Raw item identity, canonicalized before any preference lookup.
    pub item_id: ItemId,

    #[serde(default)]
    pub kind: ActionKind,

    /// Scope the action belongs to. `None` for actions outside both
    /// views, such as "Cancel" or synthetic controls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Commit run when the user activates this action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_activate: Option<PreferenceCommand>,
}

impl Action {
    /// Create a real action belonging to `context`.
    pub fn new(
        label: impl Into<String>,
        subject_name: impl Into<String>,
        item_id: impl Into<ItemId>,
        kind: ActionKind,
        context: Context,
    ) -> Self {
        Self {
            label: label.into(),
            subject_name: subject_name.into(),
            item_id: item_id.into(),
            kind,
            context: Some(context),
            on_activate: None,
        }
    }

    /// Create a synthetic control that runs `command` when activated.
    pub fn control(
        label: impl Into<String>,
        subject_name: impl Into<String>,
        item_id: ItemId,
        command: PreferenceCommand,
    ) -> Self {
        Self {
            label: label.into(),
            subject_name: subject_name.into(),
            item_id,
            kind: ActionKind::Synthetic,
            context: None,
            on_activate: Some(command),
        }
    }

    /// An action outside both views, e.g. "Cancel".
    pub fn unscoped(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            subject_name: String::new(),
            item_id: ItemId(-1),
            kind: ActionKind::Other,
            context: None,
            on_activate: None,
        }
    }
}

/// The actions of one rebuild, in host order.
///
/// The last action is the one the host runs on a plain click.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionList(Vec<Action>);

impl ActionList {
    pub fn new(actions: Vec<Action>) -> Self {
        Self(actions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the host's default action.
    pub fn last_index(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    /// The host's default action.
    pub fn last(&self) -> Option<&Action> {
        self.0.last()
    }

    pub fn get(&self, index: usize) -> Option<&Action> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.0.iter()
    }

    /// Move the action at `index` into the last position and mark it
    /// `Primary`. The previous last action takes its place.
    pub fn promote(&mut self, index: usize) {
        let Some(last) = self.last_index() else {
            return;
        };
        if index > last {
            return;
        }
        self.0[index].kind = ActionKind::Primary;
        self.0.swap(index, last);
    }

    /// Insert an action at the bottom of the menu (index 0).
    pub fn insert_bottom(&mut self, action: Action) {
        self.0.insert(0, action);
    }

    /// Find an action by exact label.
    pub fn find(&self, label: &str) -> Option<&Action> {
        self.0.iter().find(|a| a.label == label)
    }

    /// Index of the first action with the given label.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|a| a.label == label)
    }

    /// Labels in list order.
    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|a| a.label.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<Action> {
        self.0
    }
}

impl From<Vec<Action>> for ActionList {
    fn from(actions: Vec<Action>) -> Self {
        Self(actions)
    }
}

impl IntoIterator for ActionList {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
