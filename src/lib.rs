pub mod app;
pub mod command;
pub mod config;
pub mod form;
pub mod notification;
pub mod person;
pub mod selection;
pub mod storage;
pub mod store;

pub use app::{render, App, AppState, PersonRow, UiEvent, View, ViewModel};
pub use command::{apply_command, next_id, CommandError, PersonCommand};
pub use config::{AppConfig, ConfigError};
pub use form::PersonForm;
pub use notification::{count_changed_message, CountNotifier, DEFAULT_NOTIFICATION_TTL};
pub use person::{person_ids, Person, PersonId};
pub use selection::{toggle, Selection, SelectionEvent};
pub use storage::{FileStorage, InMemoryStorage, KeyValueStorage, StorageError};
pub use store::{PersonStore, StoreError, SubscriptionId};
