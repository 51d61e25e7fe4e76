use std::time::Instant;

use person_list::{
    App, AppConfig, FileStorage, KeyValueStorage, PersonCommand, PersonStore, StoreError,
};

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = PersonStore::open(FileStorage::open(dir.path()).unwrap(), "persons")
            .unwrap();
        store
            .dispatch_all(vec![
                PersonCommand::add("Ann", "Lee"),
                PersonCommand::add("Bo", "Ek"),
                PersonCommand::delete(1),
            ])
            .unwrap();
    }

    let store =
        PersonStore::open(FileStorage::open(dir.path()).unwrap(), "persons").unwrap();
    assert_eq!(store.persons().len(), 1);
    assert_eq!(store.persons()[0].id, 2);
    assert_eq!(store.persons()[0].first_name, "Bo");
}

#[test]
fn malformed_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();
    storage.set_item("persons", "{ not a list").unwrap();

    let result = App::open(storage.clone(), &AppConfig::default(), Instant::now());
    match result {
        Err(StoreError::MalformedSnapshot { key, .. }) => assert_eq!(key, "persons"),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("malformed snapshot was accepted"),
    }

    // Nothing was written over the bad value.
    assert_eq!(
        storage.get_item("persons").unwrap().as_deref(),
        Some("{ not a list")
    );
}

#[test]
fn configured_key_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();
    let config = AppConfig {
        storage_key: "people".into(),
        ..AppConfig::default()
    };

    let mut app = App::open(storage.clone(), &config, Instant::now()).unwrap();
    app.execute(PersonCommand::add("Ann", "Lee"), Instant::now())
        .unwrap();

    assert!(storage.get_item("persons").unwrap().is_none());
    assert!(storage.get_item("people").unwrap().is_some());
    assert!(dir.path().join("people.json").exists());
}
