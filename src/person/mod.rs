use serde::{Deserialize, Serialize};

/// Identifier assigned to a person by the store.
pub type PersonId = u64;

/// A person as persisted in the snapshot.
///
/// Serialized in camelCase so the stored text reads
/// `{"id":1,"firstName":"Ann","lastName":"Lee"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(id: PersonId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Person {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Collect the ids of a snapshot, in list order.
pub fn person_ids(persons: &[Person]) -> Vec<PersonId> {
    persons.iter().map(|p| p.id).collect()
}
