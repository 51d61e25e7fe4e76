//! PersonStore - command-sourced person list over key-value storage.
//!
//! The store reads the persisted snapshot once on open, then folds each
//! dispatched command into it, writes the result back under the same key and
//! publishes it to every subscriber before the next command is accepted.
//!
//! ## Example
//!
//! ```ignore
//! use person_list::{InMemoryStorage, PersonCommand, PersonStore};
//!
//! let mut store = PersonStore::open(InMemoryStorage::new(), "persons")?;
//! store.subscribe(|persons| println!("{} persons", persons.len()));
//! store.dispatch(PersonCommand::add("Ann", "Lee"))?;
//! ```

mod error;

use tracing::{debug, info};

use crate::command::{apply_command, PersonCommand};
use crate::person::Person;
use crate::storage::KeyValueStorage;

pub use error::StoreError;

type Listener = Box<dyn Fn(&[Person])>;

/// Handle returned by [`PersonStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct PersonStore<S> {
    storage: S,
    key: String,
    persons: Vec<Person>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage> PersonStore<S> {
    /// Load the snapshot stored under `key`.
    ///
    /// A missing value is an empty list. A value that does not parse is
    /// returned as [`StoreError::MalformedSnapshot`]; writing over it would
    /// lose data.
    pub fn open(storage: S, key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        let persons = match storage.get_item(&key)? {
            Some(raw) => serde_json::from_str::<Vec<Person>>(&raw).map_err(|e| {
                StoreError::MalformedSnapshot {
                    key: key.clone(),
                    message: e.to_string(),
                }
            })?,
            None => Vec::new(),
        };

        info!(key = %key, persons = persons.len(), "person store opened");

        Ok(PersonStore {
            storage,
            key,
            persons,
            listeners: Vec::new(),
            next_subscription: 1,
        })
    }

    /// Apply one command, persist the result and publish it.
    ///
    /// Every successful call produces exactly one write and one publication,
    /// even when the command leaves the list unchanged. A rejected command
    /// writes and publishes nothing.
    pub fn dispatch(&mut self, command: PersonCommand) -> Result<&[Person], StoreError> {
        let next = apply_command(&self.persons, &command)?;
        let serialized =
            serde_json::to_string(&next).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.storage.set_item(&self.key, &serialized)?;

        debug!(
            command = command.command_name(),
            before = self.persons.len(),
            after = next.len(),
            "command applied"
        );

        self.persons = next;
        self.publish();
        Ok(&self.persons)
    }

    /// Apply commands one at a time in order. Stops at the first failure.
    pub fn dispatch_all<I>(&mut self, commands: I) -> Result<&[Person], StoreError>
    where
        I: IntoIterator<Item = PersonCommand>,
    {
        for command in commands {
            self.dispatch(command)?;
        }
        Ok(&self.persons)
    }

    fn publish(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.persons);
        }
    }
}

impl<S> PersonStore<S> {
    /// The current snapshot.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a listener called with every published snapshot, in
    /// subscription order.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[Person]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}
