use super::{App, View};
use crate::person::PersonId;

/// One table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonRow {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub selected: bool,
}

/// Everything the rendering side needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    pub view: View,
    pub rows: Vec<PersonRow>,
    pub show_delete: bool,
    pub message: String,
    pub first_name: String,
    pub last_name: String,
}

/// Build the view model from the current app state. Has no side effects.
pub fn render<S>(app: &App<S>) -> ViewModel {
    let selection = app.selection();
    let rows = app
        .persons()
        .iter()
        .map(|p| PersonRow {
            id: p.id,
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            selected: selection.is_selected(p.id),
        })
        .collect();

    ViewModel {
        view: app.view(),
        rows,
        show_delete: !selection.is_empty(),
        message: app.message().to_string(),
        first_name: app.form().first_name().to_string(),
        last_name: app.form().last_name().to_string(),
    }
}
