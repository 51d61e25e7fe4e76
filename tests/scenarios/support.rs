use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use person_list::{App, AppConfig, InMemoryStorage, Person, PersonStore, UiEvent};

pub fn open_app(storage: InMemoryStorage) -> (App<InMemoryStorage>, Instant) {
    let now = Instant::now();
    let app = App::open(storage, &AppConfig::default(), now).unwrap();
    (app, now)
}

pub fn add_person(app: &mut App<InMemoryStorage>, first: &str, last: &str, now: Instant) {
    app.handle_all(
        vec![
            UiEvent::FirstNameInput(first.into()),
            UiEvent::LastNameInput(last.into()),
            UiEvent::CreateClicked,
        ],
        now,
    )
    .unwrap();
}

/// Record every snapshot a store publishes.
pub fn record_snapshots(store: &mut PersonStore<InMemoryStorage>) -> Rc<RefCell<Vec<Vec<Person>>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |persons| sink.borrow_mut().push(persons.to_vec()));
    seen
}
