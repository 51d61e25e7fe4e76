//! Commands - intents to change the persisted person list.
//!
//! A command is created per user action and folded exactly once into the
//! current snapshot by [`apply_command`]. The store owns persistence and
//! publication; this module only holds the pure fold.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::person::{Person, PersonId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The largest stored id leaves no room for another one.
    IdExhausted { max: PersonId },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::IdExhausted { max } => {
                write!(f, "no person id left after {}", max)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// An intent to mutate the person list, matched structurally by the fold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum PersonCommand {
    AddPerson {
        first_name: String,
        last_name: String,
    },
    DeletePerson {
        id: PersonId,
    },
    DeletePersons {
        ids: Vec<PersonId>,
    },
    ClearPersons,
}

impl PersonCommand {
    pub fn add(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        PersonCommand::AddPerson {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn delete(id: PersonId) -> Self {
        PersonCommand::DeletePerson { id }
    }

    pub fn delete_many(ids: impl Into<Vec<PersonId>>) -> Self {
        PersonCommand::DeletePersons { ids: ids.into() }
    }

    pub fn clear() -> Self {
        PersonCommand::ClearPersons
    }

    /// The discriminant as it appears in the serialized form.
    pub fn command_name(&self) -> &'static str {
        match self {
            PersonCommand::AddPerson { .. } => "AddPerson",
            PersonCommand::DeletePerson { .. } => "DeletePerson",
            PersonCommand::DeletePersons { .. } => "DeletePersons",
            PersonCommand::ClearPersons => "ClearPersons",
        }
    }
}

/// The id the next added person receives: `max(ids, 0) + 1`.
pub fn next_id(persons: &[Person]) -> Result<PersonId, CommandError> {
    let max = persons.iter().map(|p| p.id).fold(0, PersonId::max);
    max.checked_add(1).ok_or(CommandError::IdExhausted { max })
}

/// Fold one command into a snapshot, producing the next snapshot.
///
/// Deleting an id that is not present leaves the list unchanged.
pub fn apply_command(
    persons: &[Person],
    command: &PersonCommand,
) -> Result<Vec<Person>, CommandError> {
    let next = match command {
        PersonCommand::AddPerson {
            first_name,
            last_name,
        } => {
            let id = next_id(persons)?;
            let mut next = persons.to_vec();
            next.push(Person::new(id, first_name.clone(), last_name.clone()));
            next
        }
        PersonCommand::DeletePerson { id } => {
            persons.iter().filter(|p| p.id != *id).cloned().collect()
        }
        PersonCommand::DeletePersons { ids } => persons
            .iter()
            .filter(|p| !ids.contains(&p.id))
            .cloned()
            .collect(),
        PersonCommand::ClearPersons => Vec::new(),
    };
    Ok(next)
}
