//! A titled list that owns an ordered ledger of todos.
//!
//! # Invariants
//! - Todo ids are unique within the ledger and never reused: `next_todo_id`
//!   only moves forward, including across removals.
//! - `next_todo_id` is greater than every id in the ledger. `u64::MAX` is
//!   never a todo id, so the counter cannot run past the end of the range.
//! - The ledger keeps insertion order. Display order comes from
//!   [`sort_todos`](crate::sort_todos), never from mutating the ledger.
//! - Title uniqueness among sibling lists is the caller's concern.

use crate::error::{CoreError, CoreResult};
use crate::todo::{validate_title, Todo, TodoId};
use crate::types::{TodoListRecord, TodoRecord};

/// Identifier of a list, unique within one session.
pub type TodoListId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    id: TodoListId,
    title: String,
    todos: Vec<Todo>,
    next_todo_id: TodoId,
}

impl TodoList {
    /// Create an empty list. Sessions issue ids through
    /// [`TodoLists::create_list`](crate::TodoLists::create_list).
    pub fn new(id: TodoListId, title: impl Into<String>) -> CoreResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        if id == 0 {
            return Err(CoreError::invalid("todo list id must be at least 1"));
        }
        Ok(Self {
            id,
            title,
            todos: Vec::new(),
            next_todo_id: 1,
        })
    }

    pub fn id(&self) -> TodoListId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title in place.
    pub fn set_title(&mut self, title: impl Into<String>) -> CoreResult<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// The ledger in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Build a todo carrying this list's next id. The todo is not in the
    /// ledger until passed to [`add`](Self::add).
    pub fn create_todo(&mut self, title: impl Into<String>) -> CoreResult<Todo> {
        let next = successor(self.next_todo_id, self.id)?;
        let todo = Todo::new(self.next_todo_id, title)?;
        self.next_todo_id = next;
        Ok(todo)
    }

    /// Append a todo to the end of the ledger.
    ///
    /// Rejects a todo whose id is already in the ledger, or `u64::MAX`.
    /// Accepting a todo moves the id counter past its id.
    pub fn add(&mut self, todo: Todo) -> CoreResult<()> {
        if self.find_index_of(&todo).is_some() {
            return Err(CoreError::invalid(format!(
                "todo {} is already in list {}",
                todo.id(),
                self.id
            )));
        }
        let past = successor(todo.id(), self.id)?;
        self.next_todo_id = self.next_todo_id.max(past);
        self.todos.push(todo);
        Ok(())
    }

    /// Remove and return the todo at `index`.
    pub fn remove_at(&mut self, index: usize) -> CoreResult<Todo> {
        if index >= self.todos.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.remove(index))
    }

    /// Ledger position of the todo with the same id, or `None`.
    pub fn find_index_of(&self, todo: &Todo) -> Option<usize> {
        self.position(todo.id())
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|t| t.id() == id)
    }

    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id() == id)
    }

    pub fn todo_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id() == id)
    }

    pub fn mark_all_done(&mut self) {
        self.todos.iter_mut().for_each(Todo::mark_done);
    }

    /// True when the ledger is non-empty and every todo is done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(Todo::is_done)
    }

    pub fn to_record(&self) -> TodoListRecord {
        TodoListRecord {
            id: self.id,
            title: self.title.clone(),
            todos: self
                .todos
                .iter()
                .map(|t| TodoRecord {
                    id: t.id(),
                    title: t.title().to_string(),
                    done: t.is_done(),
                })
                .collect(),
            next_todo_id: self.next_todo_id,
        }
    }
}

fn successor(id: TodoId, list: TodoListId) -> CoreResult<TodoId> {
    id.checked_add(1)
        .ok_or_else(|| CoreError::invalid(format!("todo ids exhausted in list {list}")))
}

impl TryFrom<TodoRecord> for Todo {
    type Error = CoreError;

    fn try_from(record: TodoRecord) -> CoreResult<Self> {
        let mut todo = Todo::new(record.id, record.title)?;
        if record.done {
            todo.mark_done();
        }
        Ok(todo)
    }
}

impl TryFrom<TodoListRecord> for TodoList {
    type Error = CoreError;

    fn try_from(record: TodoListRecord) -> CoreResult<Self> {
        let mut list = TodoList::new(record.id, record.title)?;
        for item in record.todos {
            list.add(Todo::try_from(item)?)?;
        }
        list.next_todo_id = list.next_todo_id.max(record.next_todo_id);
        Ok(list)
    }
}
