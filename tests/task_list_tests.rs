use proptest::prelude::*;
use todos::core::action::{Action, Effect, update};
use todos::core::state::App;
use todos::core::task::{EMPTY_MESSAGE, ListView, Task, TaskId, TaskList};

// ============================================================================
// Helper Functions
// ============================================================================

fn snapshot(list: &TaskList) -> Vec<(TaskId, String, bool)> {
    list.iter()
        .map(|t| (t.id(), t.text().to_string(), t.completed))
        .collect()
}

/// A list built from `texts`, with every entry at an index in `done` completed.
fn build(texts: &[String], done: &[bool]) -> TaskList {
    let mut list = TaskList::new();
    for (text, &completed) in texts.iter().zip(done.iter().chain(std::iter::repeat(&false))) {
        if let Some(id) = list.add(text) {
            if completed {
                list.toggle(id);
            }
        }
    }
    list
}

fn non_blank() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[a-zA-Z0-9가-힣][a-zA-Z0-9가-힣 ]{0,20}[ \t]{0,3}"
}

fn blank() -> impl Strategy<Value = String> {
    "[ \t\n\r]{0,8}"
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_buy_milk_scenario() {
    let mut app = App::new();

    update(&mut app, Action::EditInput("Buy milk".to_string()));
    assert_eq!(update(&mut app, Action::Submit), Effect::Render);
    let entries: Vec<&Task> = app.tasks.iter().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text(), "Buy milk");
    assert!(!entries[0].completed);
    let id = entries[0].id();

    update(&mut app, Action::EditInput("  ".to_string()));
    assert_eq!(update(&mut app, Action::Submit), Effect::None);
    assert_eq!(app.tasks.len(), 1);

    update(&mut app, Action::Toggle(id));
    assert!(app.tasks.get(id).unwrap().completed);

    update(&mut app, Action::Delete(id));
    assert!(app.tasks.is_empty());
    assert_eq!(app.tasks.render(), ListView::Empty(EMPTY_MESSAGE));
}

#[test]
fn test_delete_first_of_two() {
    let mut list = TaskList::new();
    let a = list.add("A").unwrap();
    list.add("B").unwrap();

    let order: Vec<&str> = list.iter().map(Task::text).collect();
    assert_eq!(order, ["A", "B"]);

    list.delete(a);
    let order: Vec<&str> = list.iter().map(Task::text).collect();
    assert_eq!(order, ["B"]);
}

#[test]
fn test_many_consecutive_ids_are_distinct() {
    let mut list = TaskList::new();
    let mut ids = std::collections::HashSet::new();
    for i in 0..1000 {
        let id = list.add(&format!("task {i}")).unwrap();
        assert!(ids.insert(id), "duplicate id {id}");
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_add_non_blank_appends_one(
        texts in proptest::collection::vec(non_blank(), 0..8),
        s in non_blank(),
    ) {
        let mut list = build(&texts, &[]);
        let before = snapshot(&list);

        let id = list.add(&s).expect("non-blank text is added");

        prop_assert_eq!(list.len(), before.len() + 1);
        let last = list.iter().last().unwrap();
        prop_assert_eq!(last.id(), id);
        prop_assert_eq!(last.text(), s.trim());
        prop_assert!(!last.completed);
        prop_assert_eq!(&snapshot(&list)[..before.len()], &before[..]);
    }

    #[test]
    fn prop_add_blank_is_noop(
        texts in proptest::collection::vec(non_blank(), 0..8),
        s in blank(),
    ) {
        let mut list = build(&texts, &[]);
        let before = snapshot(&list);

        prop_assert_eq!(list.add(&s), None);
        prop_assert_eq!(snapshot(&list), before);
    }

    #[test]
    fn prop_toggle_flips_exactly_one(
        texts in proptest::collection::vec(non_blank(), 1..8),
        done in proptest::collection::vec(any::<bool>(), 0..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut list = build(&texts, &done);
        let before = snapshot(&list);
        let target = pick.index(before.len());

        prop_assert!(list.toggle(before[target].0));

        let after = snapshot(&list);
        for (i, (old, new)) in before.iter().zip(after.iter()).enumerate() {
            prop_assert_eq!(old.0, new.0);
            prop_assert_eq!(&old.1, &new.1);
            if i == target {
                prop_assert_eq!(old.2, !new.2);
            } else {
                prop_assert_eq!(old.2, new.2);
            }
        }
    }

    #[test]
    fn prop_delete_removes_exactly_one_in_order(
        texts in proptest::collection::vec(non_blank(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut list = build(&texts, &[]);
        let mut expected = snapshot(&list);
        let target = pick.index(expected.len());
        let removed = expected.remove(target);

        prop_assert!(list.delete(removed.0));
        prop_assert_eq!(snapshot(&list), expected);
    }

    #[test]
    fn prop_unknown_ids_are_noops(
        texts in proptest::collection::vec(non_blank(), 0..8),
        done in proptest::collection::vec(any::<bool>(), 0..8),
    ) {
        let mut list = build(&texts, &done);
        let before = snapshot(&list);
        let stranger = TaskId::new();

        prop_assert!(!list.toggle(stranger));
        prop_assert!(!list.delete(stranger));
        prop_assert_eq!(snapshot(&list), before);
    }

    #[test]
    fn prop_render_matches_collection(
        texts in proptest::collection::vec(non_blank(), 0..8),
    ) {
        let list = build(&texts, &[]);
        match list.render() {
            ListView::Empty(message) => {
                prop_assert!(list.is_empty());
                prop_assert_eq!(message, EMPTY_MESSAGE);
            }
            ListView::Entries(entries) => {
                let trimmed: Vec<&str> = texts.iter().map(|t| t.trim()).collect();
                let shown: Vec<&str> = entries.iter().map(Task::text).collect();
                prop_assert_eq!(shown, trimmed);
            }
        }
    }
}
