//! A single todo item.
//!
//! Fields are private so the id cannot change after construction. New todos
//! normally come from [`TodoList::create_todo`](crate::TodoList::create_todo),
//! which issues the next per-list id.

use crate::error::{CoreError, CoreResult};

/// Identifier of a todo, unique within its owning list.
pub type TodoId = u64;

/// Longest title accepted for lists and todos, counted in characters.
pub const MAX_TITLE_CHARS: usize = 100;

/// Check the title rule shared by todos and lists: non-empty and at most
/// [`MAX_TITLE_CHARS`] characters. Whitespace is not trimmed here.
pub fn validate_title(title: &str) -> CoreResult<()> {
    if title.is_empty() {
        return Err(CoreError::invalid("title must not be empty"));
    }
    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(CoreError::invalid(format!(
            "title is {chars} characters, maximum is {MAX_TITLE_CHARS}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    done: bool,
}

impl Todo {
    /// Build an undone todo. Fails with `InvalidArgument` on a bad title or
    /// a zero id (ids start at 1).
    pub fn new(id: TodoId, title: impl Into<String>) -> CoreResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        if id == 0 {
            return Err(CoreError::invalid("todo id must be at least 1"));
        }
        Ok(Self {
            id,
            title,
            done: false,
        })
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_not_done() {
        let todo = Todo::new(1, "Buy milk").unwrap();
        assert_eq!(todo.id(), 1);
        assert_eq!(todo.title(), "Buy milk");
        assert!(!todo.is_done());
    }

    #[test]
    fn mark_done_is_idempotent() {
        let mut todo = Todo::new(1, "Walk dog").unwrap();
        todo.mark_done();
        todo.mark_done();
        assert!(todo.is_done());
        todo.mark_undone();
        assert!(!todo.is_done());
    }

    #[test]
    fn rejects_empty_title() {
        let err = Todo::new(1, "").unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        let hundred = "é".repeat(MAX_TITLE_CHARS);
        assert!(Todo::new(1, hundred.clone()).is_ok());

        let too_long = format!("{hundred}x");
        let err = Todo::new(1, too_long).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_zero_id() {
        assert!(Todo::new(0, "Zero").is_err());
    }

    #[test]
    fn whitespace_title_is_accepted_untrimmed() {
        let todo = Todo::new(1, "  spaced  ").unwrap();
        assert_eq!(todo.title(), "  spaced  ");
    }
}
