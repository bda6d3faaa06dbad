use proptest::prelude::*;
use todos_core::{sort_todo_lists, sort_todos, Todo, TodoList, TodoLists};

fn title() -> impl Strategy<Value = String> {
    "\\PC{1,100}"
}

fn entries() -> impl Strategy<Value = Vec<(String, bool)>> {
    proptest::collection::vec((title(), any::<bool>()), 0..24)
}

fn list_of(entries: &[(String, bool)]) -> TodoList {
    let mut list = TodoList::new(1, "Generated").unwrap();
    for (title, done) in entries {
        let mut todo = list.create_todo(title.clone()).unwrap();
        if *done {
            todo.mark_done();
        }
        list.add(todo).unwrap();
    }
    list
}

fn lists_of(entries: &[(String, bool)]) -> TodoLists {
    let mut lists = TodoLists::new();
    for (title, done) in entries {
        let id = lists.create_list(title.clone()).unwrap();
        if *done {
            let list = lists.load_todo_list_mut(id).unwrap();
            let todo = list.create_todo("only").unwrap();
            list.add(todo).unwrap();
            list.mark_all_done();
        }
    }
    lists
}

proptest! {
    #[test]
    fn todo_title_round_trips(t in title()) {
        let todo = Todo::new(1, t.clone()).unwrap();
        prop_assert_eq!(todo.title(), t.as_str());
    }

    #[test]
    fn list_title_round_trips(t in title()) {
        let mut list = TodoList::new(1, t.clone()).unwrap();
        prop_assert_eq!(list.title(), t.as_str());
        list.set_title(t.clone()).unwrap();
        prop_assert_eq!(list.title(), t.as_str());
    }

    #[test]
    fn mark_done_then_undone_restores(start in any::<bool>(), done_first in any::<bool>()) {
        let mut todo = Todo::new(1, "toggle").unwrap();
        if start {
            todo.mark_done();
        }
        if done_first {
            todo.mark_done();
            todo.mark_undone();
            prop_assert!(!todo.is_done());
        } else {
            todo.mark_undone();
            todo.mark_done();
            prop_assert!(todo.is_done());
        }
    }

    #[test]
    fn mark_all_done_makes_non_empty_list_done(e in entries()) {
        let mut list = list_of(&e);
        list.mark_all_done();
        prop_assert_eq!(list.is_done(), !e.is_empty());
    }

    #[test]
    fn removed_todo_is_not_found(e in proptest::collection::vec((title(), any::<bool>()), 1..24),
                                 pick in any::<prop::sample::Index>()) {
        let mut list = list_of(&e);
        let index = pick.index(list.len());
        let removed = list.remove_at(index).unwrap();
        prop_assert_eq!(list.find_index_of(&removed), None);
    }

    #[test]
    fn todo_ids_are_never_reused(ops in proptest::collection::vec(any::<Option<prop::sample::Index>>(), 1..48)) {
        let mut list = TodoList::new(1, "Churn").unwrap();
        let mut issued = Vec::new();
        for op in ops {
            match op {
                Some(pick) if !list.is_empty() => {
                    let index = pick.index(list.len());
                    list.remove_at(index).unwrap();
                }
                _ => {
                    let todo = list.create_todo("item").unwrap();
                    prop_assert!(!issued.contains(&todo.id()));
                    issued.push(todo.id());
                    list.add(todo).unwrap();
                }
            }
        }
    }

    #[test]
    fn sort_todos_partitions_and_orders(e in entries()) {
        let list = list_of(&e);
        let sorted = sort_todos(&list);
        prop_assert_eq!(sorted.len(), list.len());

        let first_done = sorted.iter().position(|t| t.is_done()).unwrap_or(sorted.len());
        prop_assert!(sorted[first_done..].iter().all(|t| t.is_done()));

        for pair in sorted.windows(2) {
            if pair[0].is_done() == pair[1].is_done() {
                prop_assert!(pair[0].title().to_lowercase() <= pair[1].title().to_lowercase());
            }
        }
    }

    #[test]
    fn sort_todo_lists_is_idempotent(e in entries()) {
        let lists = lists_of(&e);
        let once: Vec<u64> = sort_todo_lists(&lists).iter().map(|l| l.id()).collect();
        let twice: Vec<u64> = sort_todo_lists(sort_todo_lists(&lists)).iter().map(|l| l.id()).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_todo_lists_puts_undone_first(e in entries()) {
        let lists = lists_of(&e);
        let sorted = sort_todo_lists(&lists);
        let first_done = sorted.iter().position(|l| l.is_done()).unwrap_or(sorted.len());
        prop_assert!(sorted[..first_done].iter().all(|l| !l.is_done()));
        prop_assert!(sorted[first_done..].iter().all(|l| l.is_done()));
    }

    #[test]
    fn session_record_round_trips(e in entries()) {
        let mut lists = lists_of(&e);
        if let Some(first) = lists.iter().next().map(TodoList::id) {
            let list = lists.load_todo_list_mut(first).unwrap();
            for (title, done) in &e {
                let mut todo = list.create_todo(title.clone()).unwrap();
                if *done {
                    todo.mark_done();
                }
                list.add(todo).unwrap();
            }
        }

        let record = lists.to_record();
        let json = serde_json::to_string(&record).unwrap();
        let rebuilt = TodoLists::from_record(serde_json::from_str(&json).unwrap()).unwrap();
        prop_assert_eq!(rebuilt, lists);
    }
}

#[test]
fn sorts_fruit_and_mixed_status_examples() {
    let list = list_of(&[
        ("banana".to_string(), false),
        ("Apple".to_string(), false),
        ("cherry".to_string(), false),
    ]);
    let titles: Vec<&str> = sort_todos(&list).into_iter().map(Todo::title).collect();
    assert_eq!(titles, ["Apple", "banana", "cherry"]);

    let lists = lists_of(&[
        ("Zebra".to_string(), true),
        ("Apple".to_string(), false),
        ("Mango".to_string(), false),
    ]);
    let titles: Vec<&str> = sort_todo_lists(&lists).into_iter().map(TodoList::title).collect();
    assert_eq!(titles, ["Apple", "Mango", "Zebra"]);
}
