//! In-memory domain core for the session-backed todo manager.
//!
//! # Overview
//! Todo lists, their todos, and the display ordering applied to both. The
//! crate does no I/O and keeps no global state: a caller hands it a
//! [`TodoLists`] rebuilt from the session, mutates it, and stores the
//! resulting [`SessionRecord`] back.
//!
//! # Design
//! - Entities keep their fields private so ids cannot change after creation.
//! - Ids are issued by the owner (`TodoLists` for lists, `TodoList` for
//!   todos) and never reused.
//! - Lookups return `Option`; only invalid input and bad indices are errors.
//! - Reconstruction from records is total: any invalid field rejects the
//!   whole record.

pub mod error;
pub mod sort;
pub mod todo;
pub mod todo_list;
pub mod todo_lists;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use sort::{sort_todo_lists, sort_todos};
pub use todo::{validate_title, Todo, TodoId, MAX_TITLE_CHARS};
pub use todo_list::{TodoList, TodoListId};
pub use todo_lists::TodoLists;
pub use types::{SessionRecord, TodoListRecord, TodoRecord};
