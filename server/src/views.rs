//! JSON documents returned by the handlers.
//!
//! Every collection in a view is already in display order (see
//! `todos_core::sort`). Views also derive `Deserialize` so clients and tests
//! can read them back.

use serde::{Deserialize, Serialize};
use todos_core::{sort_todo_lists, sort_todos, Todo, TodoList, TodoLists};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoView {
    pub id: u64,
    pub title: String,
    pub done: bool,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title().to_string(),
            done: todo.is_done(),
        }
    }
}

/// One row of the lists index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListSummary {
    pub id: u64,
    pub title: String,
    pub done: bool,
    pub todo_count: usize,
    pub remaining: usize,
}

impl From<&TodoList> for ListSummary {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id(),
            title: list.title().to_string(),
            done: list.is_done(),
            todo_count: list.len(),
            remaining: list.todos().iter().filter(|t| !t.is_done()).count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListView {
    pub id: u64,
    pub title: String,
    pub done: bool,
    pub todos: Vec<TodoView>,
}

impl From<&TodoList> for ListView {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id(),
            title: list.title().to_string(),
            done: list.is_done(),
            todos: sort_todos(list).into_iter().map(TodoView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListsPage {
    pub todo_lists: Vec<ListSummary>,
}

impl From<&TodoLists> for ListsPage {
    fn from(lists: &TodoLists) -> Self {
        Self {
            todo_lists: sort_todo_lists(lists)
                .into_iter()
                .map(ListSummary::from)
                .collect(),
        }
    }
}

/// A list together with the confirmation text of the change that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub todo_list: ListView,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
