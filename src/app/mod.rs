//! App - single coordinator for the person list.
//!
//! Owns the store, the selection, the count notifier, the add form and the
//! active view. Each [`UiEvent`] is processed to completion: derive at most one
//! command, dispatch it, then reconcile the selection and the notifier with
//! the published list. Rendering is a separate pure step over the result.

mod render;

use std::time::Instant;

use tracing::{debug, warn};

use crate::command::PersonCommand;
use crate::config::AppConfig;
use crate::form::PersonForm;
use crate::notification::CountNotifier;
use crate::person::{person_ids, Person, PersonId};
use crate::selection::{Selection, SelectionEvent};
use crate::storage::KeyValueStorage;
use crate::store::{PersonStore, StoreError};

pub use render::{render, PersonRow, ViewModel};

/// Which screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    Add,
    #[default]
    List,
}

/// UI interaction facts, already extracted from the DOM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    FirstNameInput(String),
    LastNameInput(String),
    CreateClicked,
    /// A row toggle carrying the desired state.
    RowToggled { id: PersonId, selected: bool },
    /// A row click that flips the current state.
    RowClicked(PersonId),
    DeleteClicked,
    ClearClicked,
    ViewSelected(View),
}

/// The snapshot handed to the rendering side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub persons: Vec<Person>,
    pub selected_ids: Vec<PersonId>,
}

pub struct App<S> {
    store: PersonStore<S>,
    selection: Selection,
    notifier: CountNotifier,
    form: PersonForm,
    view: View,
}

impl<S: KeyValueStorage> App<S> {
    /// Open the store under the configured key and prime the notifier with
    /// the initial list size.
    pub fn open(storage: S, config: &AppConfig, now: Instant) -> Result<Self, StoreError> {
        let store = PersonStore::open(storage, config.storage_key.clone())?;
        let mut notifier = CountNotifier::new(config.notification_ttl());
        notifier.observe(store.persons().len(), now);

        Ok(App {
            store,
            selection: Selection::new(),
            notifier,
            form: PersonForm::new(),
            view: View::default(),
        })
    }

    /// Process one UI event. Returns the command it issued, if any.
    pub fn handle(
        &mut self,
        event: UiEvent,
        now: Instant,
    ) -> Result<Option<PersonCommand>, StoreError> {
        let command = match event {
            UiEvent::FirstNameInput(value) => {
                self.form.set_first_name(value);
                None
            }
            UiEvent::LastNameInput(value) => {
                self.form.set_last_name(value);
                None
            }
            UiEvent::CreateClicked => self.form.submit(),
            UiEvent::RowToggled { id, selected } => {
                self.toggle_row(id, selected);
                None
            }
            UiEvent::RowClicked(id) => {
                let selected = !self.selection.is_selected(id);
                self.toggle_row(id, selected);
                None
            }
            UiEvent::DeleteClicked => {
                let request = self.selection.delete_request();
                if request.is_none() {
                    debug!("delete ignored: nothing selected");
                }
                request
            }
            UiEvent::ClearClicked => Some(self.selection.clear_request()),
            UiEvent::ViewSelected(view) => {
                self.view = view;
                None
            }
        };

        if let Some(command) = &command {
            self.execute(command.clone(), now)?;
        }
        Ok(command)
    }

    /// Process events in order, stopping at the first failure.
    pub fn handle_all<I>(&mut self, events: I, now: Instant) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = UiEvent>,
    {
        for event in events {
            self.handle(event, now)?;
        }
        Ok(())
    }

    /// Dispatch a command and reconcile derived state with the new list.
    pub fn execute(&mut self, command: PersonCommand, now: Instant) -> Result<(), StoreError> {
        let persons = self.store.dispatch(command)?;
        let ids = person_ids(persons);
        let len = persons.len();

        self.selection.apply(SelectionEvent::PersonListChanged(ids));
        self.notifier.observe(len, now);
        Ok(())
    }

    fn toggle_row(&mut self, id: PersonId, selected: bool) {
        if selected && !self.store.persons().iter().any(|p| p.id == id) {
            warn!(id = id, "selection ignored: person not in list");
            return;
        }
        self.selection.apply(SelectionEvent::from_toggle(id, selected));
    }
}

impl<S> App<S> {
    /// Advance the notification timer.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifier.tick(now)
    }

    pub fn state(&self) -> AppState {
        AppState {
            persons: self.store.persons().to_vec(),
            selected_ids: self.selection.selected_ids().to_vec(),
        }
    }

    pub fn persons(&self) -> &[Person] {
        self.store.persons()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn message(&self) -> &str {
        self.notifier.message()
    }

    pub fn form(&self) -> &PersonForm {
        &self.form
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn store(&self) -> &PersonStore<S> {
        &self.store
    }

    /// Mutable access for registering snapshot subscribers.
    pub fn store_mut(&mut self) -> &mut PersonStore<S> {
        &mut self.store
    }
}
