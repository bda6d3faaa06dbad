//! The collection of lists belonging to one session.
//!
//! # Design
//! A `TodoLists` value is rebuilt from a [`SessionRecord`] at the start of a
//! request, mutated, and turned back into a record at the end. It owns its
//! lists outright and holds no reference to the store it came from.
//!
//! # Invariants
//! - List ids are unique and never reused; `next_list_id` only moves forward.
//! - `next_list_id` is greater than every list id, so `u64::MAX` is never
//!   issued and an exhausted counter is an error, not a wrap.
//! - Lists keep creation order.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::todo::{Todo, TodoId};
use crate::todo_list::{TodoList, TodoListId};
use crate::types::SessionRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoLists {
    lists: Vec<TodoList>,
    next_list_id: TodoListId,
}

impl Default for TodoLists {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoLists {
    pub fn new() -> Self {
        Self {
            lists: Vec::new(),
            next_list_id: 1,
        }
    }

    /// Rebuild a collection from its stored form, validating every field.
    pub fn from_record(record: SessionRecord) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(record.todo_lists.len());
        let mut lists = Vec::with_capacity(record.todo_lists.len());
        for list_record in record.todo_lists {
            if !seen.insert(list_record.id) {
                return Err(CoreError::invalid(format!(
                    "duplicate todo list id {}",
                    list_record.id
                )));
            }
            lists.push(TodoList::try_from(list_record)?);
        }

        let mut past_highest = 1;
        for list in &lists {
            past_highest = past_highest.max(next_list_id_after(list.id())?);
        }
        Ok(Self {
            lists,
            next_list_id: record.next_list_id.max(past_highest),
        })
    }

    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            todo_lists: self.lists.iter().map(TodoList::to_record).collect(),
            next_list_id: self.next_list_id,
        }
    }

    /// Append a new empty list and return its id.
    ///
    /// Title uniqueness is not checked here; see [`has_title`](Self::has_title).
    pub fn create_list(&mut self, title: impl Into<String>) -> CoreResult<TodoListId> {
        let next = next_list_id_after(self.next_list_id)?;
        let list = TodoList::new(self.next_list_id, title)?;
        let id = list.id();
        self.next_list_id = next;
        self.lists.push(list);
        Ok(id)
    }

    /// Remove a list and everything in it.
    pub fn remove_list(&mut self, id: TodoListId) -> Option<TodoList> {
        let index = self.lists.iter().position(|l| l.id() == id)?;
        Some(self.lists.remove(index))
    }

    pub fn load_todo_list(&self, id: TodoListId) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id() == id)
    }

    pub fn load_todo_list_mut(&mut self, id: TodoListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|l| l.id() == id)
    }

    /// `None` when either the list or the todo is missing.
    pub fn load_todo(&self, list_id: TodoListId, todo_id: TodoId) -> Option<&Todo> {
        self.load_todo_list(list_id)?.todo(todo_id)
    }

    pub fn load_todo_mut(&mut self, list_id: TodoListId, todo_id: TodoId) -> Option<&mut Todo> {
        self.load_todo_list_mut(list_id)?.todo_mut(todo_id)
    }

    /// Exact, case-sensitive title match against every list.
    pub fn has_title(&self, title: &str) -> bool {
        self.lists.iter().any(|l| l.title() == title)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoList> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

fn next_list_id_after(id: TodoListId) -> CoreResult<TodoListId> {
    id.checked_add(1)
        .ok_or_else(|| CoreError::invalid("todo list ids exhausted"))
}

impl<'a> IntoIterator for &'a TodoLists {
    type Item = &'a TodoList;
    type IntoIter = std::slice::Iter<'a, TodoList>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
