use person_list::{
    apply_command, next_id, person_ids, InMemoryStorage, Person, PersonCommand, PersonId,
    PersonStore, Selection, SelectionEvent,
};
use proptest::prelude::*;

fn command_strategy() -> impl Strategy<Value = PersonCommand> {
    prop_oneof![
        4 => ("[a-z]{1,6}", "[a-z]{1,6}").prop_map(|(f, l)| PersonCommand::add(f, l)),
        2 => (1u64..12).prop_map(PersonCommand::delete),
        1 => proptest::collection::vec(1u64..12, 0..4).prop_map(|ids| PersonCommand::delete_many(ids)),
        1 => Just(PersonCommand::ClearPersons),
    ]
}

fn selection_event_strategy() -> impl Strategy<Value = SelectionEvent> {
    prop_oneof![
        (1u64..10).prop_map(SelectionEvent::PersonSelected),
        (1u64..10).prop_map(SelectionEvent::PersonDeselected),
        proptest::collection::vec(1u64..10, 0..6).prop_map(SelectionEvent::PersonListChanged),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn added_id_is_one_past_max(commands in proptest::collection::vec(command_strategy(), 0..24)) {
        let mut persons: Vec<Person> = Vec::new();
        for command in &commands {
            let expected = persons.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let next = apply_command(&persons, command).unwrap();
            if let PersonCommand::AddPerson { .. } = command {
                prop_assert_eq!(next.last().map(|p| p.id), Some(expected));
                prop_assert_eq!(next_id(&persons), Ok(expected));
            }
            persons = next;
        }

        let ids = person_ids(&persons);
        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn store_matches_pure_fold(commands in proptest::collection::vec(command_strategy(), 0..16)) {
        let storage = InMemoryStorage::new();
        let mut store = PersonStore::open(storage, "persons").unwrap();
        let mut expected: Vec<Person> = Vec::new();
        for command in commands {
            expected = apply_command(&expected, &command).unwrap();
            let persons = store.dispatch(command).unwrap();
            prop_assert_eq!(persons, expected.as_slice());
        }
    }

    #[test]
    fn list_change_keeps_selection_within_list(
        events in proptest::collection::vec(selection_event_strategy(), 0..24),
        current in proptest::collection::vec(1u64..10, 0..6),
    ) {
        let mut selection = Selection::new();
        selection.apply_all(events);
        selection.apply(SelectionEvent::PersonListChanged(current.clone()));

        for id in selection.selected_ids() {
            prop_assert!(current.contains(id));
        }
    }

    #[test]
    fn selection_stays_unique(events in proptest::collection::vec(selection_event_strategy(), 0..32)) {
        let mut selection = Selection::new();
        selection.apply_all(events);
        let mut ids: Vec<PersonId> = selection.selected_ids().to_vec();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), len);
    }

    #[test]
    fn toggles_are_idempotent(
        events in proptest::collection::vec(selection_event_strategy(), 0..16),
        id in 1u64..10,
        select in any::<bool>(),
    ) {
        let mut selection = Selection::new();
        selection.apply_all(events);

        selection.apply(SelectionEvent::from_toggle(id, select));
        let once = selection.clone();
        selection.apply(SelectionEvent::from_toggle(id, select));
        prop_assert_eq!(selection, once);
    }

    #[test]
    fn clear_always_empties(commands in proptest::collection::vec(command_strategy(), 0..12)) {
        let mut persons: Vec<Person> = Vec::new();
        for command in &commands {
            persons = apply_command(&persons, command).unwrap();
        }
        let cleared = apply_command(&persons, &PersonCommand::ClearPersons).unwrap();
        prop_assert!(cleared.is_empty());

        let mut selection = Selection::new();
        selection.apply_all(person_ids(&persons).into_iter().map(SelectionEvent::PersonSelected));
        selection.apply(SelectionEvent::PersonListChanged(person_ids(&cleared)));
        prop_assert!(selection.is_empty());
    }
}
