use tracing::warn;

use crate::command::PersonCommand;

/// Latest values of the add-person input fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonForm {
    first_name: String,
    last_name: String,
}

impl PersonForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    /// Sample the fields for a create trigger.
    ///
    /// Blank or whitespace-only fields produce no command. Accepted values
    /// are passed through exactly as entered. The fields keep their values.
    pub fn submit(&self) -> Option<PersonCommand> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            warn!("add person rejected: first and last name are required");
            return None;
        }
        Some(PersonCommand::add(
            self.first_name.clone(),
            self.last_name.clone(),
        ))
    }
}
