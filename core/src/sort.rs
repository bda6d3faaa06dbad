//! Display ordering for lists and todos.
//!
//! Both orderings put undone entries before done ones and sort each group by
//! lowercased title. The comparison is ordinal on the lowercased strings, not
//! locale-aware. Each title is lowercased once per sort, and
//! `slice::sort_by_cached_key` is stable, so entries whose lowercased titles
//! are equal keep their input order.
//!
//! The functions borrow their input and return a new vector of references;
//! the caller's collection is never reordered.

use crate::todo::Todo;
use crate::todo_list::TodoList;

/// What the sort policy needs to know about an entry.
pub trait Sortable {
    fn sort_title(&self) -> &str;
    fn sort_done(&self) -> bool;
}

impl Sortable for Todo {
    fn sort_title(&self) -> &str {
        self.title()
    }

    fn sort_done(&self) -> bool {
        self.is_done()
    }
}

impl Sortable for TodoList {
    fn sort_title(&self) -> &str {
        self.title()
    }

    fn sort_done(&self) -> bool {
        self.is_done()
    }
}

/// Key for case-insensitive title ordering.
pub fn title_key<T: Sortable + ?Sized>(item: &T) -> String {
    item.sort_title().to_lowercase()
}

/// Order entries undone-first, then by case-insensitive title.
pub fn sort_by_status_and_title<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: Sortable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let (mut undone, mut done): (Vec<&T>, Vec<&T>) =
        items.into_iter().partition(|item| !item.sort_done());
    undone.sort_by_cached_key(|item| title_key(*item));
    done.sort_by_cached_key(|item| title_key(*item));
    undone.extend(done);
    undone
}

/// Lists sorted by completion status and title.
pub fn sort_todo_lists<'a, I>(lists: I) -> Vec<&'a TodoList>
where
    I: IntoIterator<Item = &'a TodoList>,
{
    sort_by_status_and_title(lists)
}

/// The list's todos sorted by completion status and title.
pub fn sort_todos(todo_list: &TodoList) -> Vec<&Todo> {
    sort_by_status_and_title(todo_list.todos())
}
