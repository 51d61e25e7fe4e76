//! Selection - which persons are currently highlighted.
//!
//! Selection is derived UI state: it is never persisted and is reconciled
//! against every new person list, so deletes and clears drop stale ids
//! without a dedicated removal event.

use tracing::debug;

use crate::command::PersonCommand;
use crate::person::PersonId;

/// Facts folded into the selection, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    PersonSelected(PersonId),
    PersonDeselected(PersonId),
    /// The ids present in the newest person list.
    PersonListChanged(Vec<PersonId>),
}

impl SelectionEvent {
    /// Translate a row toggle `{ id, selected }` into a selection event.
    pub fn from_toggle(id: PersonId, selected: bool) -> Self {
        if selected {
            SelectionEvent::PersonSelected(id)
        } else {
            SelectionEvent::PersonDeselected(id)
        }
    }
}

/// Ordered set of selected ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected_ids: Vec<PersonId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_ids(&self) -> &[PersonId] {
        &self.selected_ids
    }

    pub fn is_selected(&self, id: PersonId) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    /// Fold one event into the selection.
    pub fn apply(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::PersonSelected(id) => {
                if !self.selected_ids.contains(&id) {
                    self.selected_ids.push(id);
                }
            }
            SelectionEvent::PersonDeselected(id) => {
                self.selected_ids.retain(|existing| *existing != id);
            }
            SelectionEvent::PersonListChanged(current) => {
                self.selected_ids.retain(|existing| current.contains(existing));
            }
        }
        debug!(selected = ?self.selected_ids, "selection updated");
    }

    /// Fold events in order.
    pub fn apply_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = SelectionEvent>,
    {
        for event in events {
            self.apply(event);
        }
    }

    /// Sample the current selection for a delete trigger.
    ///
    /// Returns None when nothing is selected.
    pub fn delete_request(&self) -> Option<PersonCommand> {
        if self.selected_ids.is_empty() {
            return None;
        }
        Some(PersonCommand::delete_many(self.selected_ids.clone()))
    }

    /// A clear trigger always yields a clear command.
    pub fn clear_request(&self) -> PersonCommand {
        PersonCommand::clear()
    }
}

/// Remove `value` if present, append it otherwise.
pub fn toggle<T: PartialEq + Clone>(values: &[T], value: T) -> Vec<T> {
    let mut copy = values.to_vec();
    match values.iter().position(|v| *v == value) {
        Some(index) => {
            copy.remove(index);
        }
        None => copy.push(value),
    }
    copy
}
