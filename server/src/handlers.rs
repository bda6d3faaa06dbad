//! Route handlers and form validation.
//!
//! Each handler runs its whole load-mutate-save cycle inside
//! [`SessionStore::with_session`](crate::session::SessionStore::with_session).
//! Path ids arrive as strings and are parsed here; anything that is not an
//! integer is reported as not found, the same as an id nobody has.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use todos_core::{TodoId, TodoListId, TodoLists, MAX_TITLE_CHARS};

use crate::error::AppError;
use crate::session::SessionId;
use crate::views::{ListResponse, ListView, ListsPage, MessageResponse};
use crate::AppState;

/// Body of every form that submits a title.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TitleForm {
    #[serde(default)]
    pub title: String,
}

fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.parse().map_err(|_| AppError::NotFound)
}

fn check_length(title: &str, required: &str, bounds: &str, errors: &mut Vec<String>) {
    if title.is_empty() {
        errors.push(required.to_string());
    } else if title.chars().count() > MAX_TITLE_CHARS {
        errors.push(bounds.to_string());
    }
}

/// Trimmed list title, or every message explaining why it was rejected.
pub fn validate_list_title(raw: &str, lists: &TodoLists) -> Result<String, AppError> {
    let title = raw.trim();
    let mut errors = Vec::new();
    check_length(
        title,
        "The list title is required.",
        "List title must be between 1 and 100 characters.",
        &mut errors,
    );
    if lists.has_title(title) {
        errors.push("List title must be unique.".to_string());
    }
    if errors.is_empty() {
        Ok(title.to_string())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Trimmed todo title, or the message explaining why it was rejected.
pub fn validate_todo_title(raw: &str) -> Result<String, AppError> {
    let title = raw.trim();
    let mut errors = Vec::new();
    check_length(
        title,
        "The todo title is required.",
        "Todo title must be between 1 and 100 characters.",
        &mut errors,
    );
    if errors.is_empty() {
        Ok(title.to_string())
    } else {
        Err(AppError::Validation(errors))
    }
}

pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

pub async fn list_todo_lists(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Json<ListsPage>, AppError> {
    let page = state
        .sessions
        .with_session(&session, |lists| Ok(ListsPage::from(&*lists)))
        .await?;
    Ok(Json(page))
}

pub async fn create_todo_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Json(form): Json<TitleForm>,
) -> Result<(StatusCode, Json<ListResponse>), AppError> {
    let view = state
        .sessions
        .with_session(&session, |lists| {
            let title = validate_list_title(&form.title, lists)?;
            let id = lists.create_list(title)?;
            tracing::info!(list_id = id, "todo list created");
            let list = lists.load_todo_list(id).ok_or(AppError::NotFound)?;
            Ok(ListView::from(list))
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ListResponse {
            message: Some("The todo list has been created.".to_string()),
            todo_list: view,
        }),
    ))
}

pub async fn show_todo_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(list_id): Path<String>,
) -> Result<Json<ListResponse>, AppError> {
    let list_id: TodoListId = parse_id(&list_id)?;
    let view = state
        .sessions
        .with_session(&session, |lists| {
            let list = lists.load_todo_list(list_id).ok_or(AppError::NotFound)?;
            Ok(ListView::from(list))
        })
        .await?;
    Ok(Json(ListResponse {
        message: None,
        todo_list: view,
    }))
}

pub async fn edit_todo_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(list_id): Path<String>,
    Json(form): Json<TitleForm>,
) -> Result<Json<ListResponse>, AppError> {
    let list_id: TodoListId = parse_id(&list_id)?;
    let view = state
        .sessions
        .with_session(&session, |lists| {
            if lists.load_todo_list(list_id).is_none() {
                return Err(AppError::NotFound);
            }
            let title = validate_list_title(&form.title, lists)?;
            let list = lists.load_todo_list_mut(list_id).ok_or(AppError::NotFound)?;
            list.set_title(title)?;
            tracing::info!(list_id, "todo list renamed");
            Ok(ListView::from(&*list))
        })
        .await?;
    Ok(Json(ListResponse {
        message: Some("Todo list title edited successfully.".to_string()),
        todo_list: view,
    }))
}

pub async fn destroy_todo_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(list_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let list_id: TodoListId = parse_id(&list_id)?;
    state
        .sessions
        .with_session(&session, |lists| {
            lists.remove_list(list_id).ok_or(AppError::NotFound)?;
            tracing::info!(list_id, "todo list deleted");
            Ok(())
        })
        .await?;
    Ok(Json(MessageResponse {
        message: "Todo list deleted.".to_string(),
    }))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(list_id): Path<String>,
    Json(form): Json<TitleForm>,
) -> Result<(StatusCode, Json<ListResponse>), AppError> {
    let list_id: TodoListId = parse_id(&list_id)?;
    let (title, view) = state
        .sessions
        .with_session(&session, |lists| {
            let list = lists.load_todo_list_mut(list_id).ok_or(AppError::NotFound)?;
            let title = validate_todo_title(&form.title)?;
            let todo = list.create_todo(title.clone())?;
            tracing::info!(list_id, todo_id = todo.id(), "todo added");
            list.add(todo)?;
            Ok((title, ListView::from(&*list)))
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ListResponse {
            message: Some(format!("\"{title}\" has been added to the list!")),
            todo_list: view,
        }),
    ))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Result<Json<ListResponse>, AppError> {
    let list_id: TodoListId = parse_id(&list_id)?;
    let todo_id: TodoId = parse_id(&todo_id)?;
    let (message, view) = state
        .sessions
        .with_session(&session, |lists| {
            let todo = lists
                .load_todo_mut(list_id, todo_id)
                .ok_or(AppError::NotFound)?;
            let message = if todo.is_done() {
                todo.mark_undone();
                format!("\"{}\" has been marked as NOT done!", todo.title())
            } else {
                todo.mark_done();
                format!("\"{}\" has been marked as done!", todo.title())
            };
            let list = lists.load_todo_list(list_id).ok_or(AppError::NotFound)?;
            Ok((message, ListView::from(list)))
        })
        .await?;
    Ok(Json(ListResponse {
        message: Some(message),
        todo_list: view,
    }))
}

pub async fn destroy_todo(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Result<Json<ListResponse>, AppError> {
    let list_id: TodoListId = parse_id(&list_id)?;
    let todo_id: TodoId = parse_id(&todo_id)?;
    let (title, view) = state
        .sessions
        .with_session(&session, |lists| {
            let list = lists.load_todo_list_mut(list_id).ok_or(AppError::NotFound)?;
            let index = list.position(todo_id).ok_or(AppError::NotFound)?;
            let removed = list.remove_at(index)?;
            tracing::info!(list_id, todo_id, "todo removed");
            Ok((removed.title().to_string(), ListView::from(&*list)))
        })
        .await?;
    Ok(Json(ListResponse {
        message: Some(format!("\"{title}\" has been removed!")),
        todo_list: view,
    }))
}

pub async fn complete_all(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(list_id): Path<String>,
) -> Result<Json<ListResponse>, AppError> {
    let list_id: TodoListId = parse_id(&list_id)?;
    let view = state
        .sessions
        .with_session(&session, |lists| {
            let list = lists.load_todo_list_mut(list_id).ok_or(AppError::NotFound)?;
            list.mark_all_done();
            Ok(ListView::from(&*list))
        })
        .await?;
    Ok(Json(ListResponse {
        message: Some("All todo items have been marked as done.".to_string()),
        todo_list: view,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_title_is_trimmed() {
        let lists = TodoLists::new();
        assert_eq!(validate_list_title("  Work  ", &lists).unwrap(), "Work");
    }

    #[test]
    fn blank_list_title_is_required() {
        let lists = TodoLists::new();
        let err = validate_list_title("   ", &lists).unwrap_err();
        match err {
            AppError::Validation(messages) => {
                assert_eq!(messages, vec!["The list title is required.".to_string()])
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn long_todo_title_is_rejected() {
        let err = validate_todo_title(&"x".repeat(101)).unwrap_err();
        match err {
            AppError::Validation(messages) => assert_eq!(
                messages,
                vec!["Todo title must be between 1 and 100 characters.".to_string()]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_list_title_is_rejected_after_trimming() {
        let mut lists = TodoLists::new();
        lists.create_list("Work").unwrap();
        let err = validate_list_title(" Work", &lists).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == &["List title must be unique."]));
        assert!(validate_list_title("work", &lists).is_ok());
    }

    #[test]
    fn non_numeric_id_is_not_found() {
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound)));
        assert!(matches!(parse_id("-1"), Err(AppError::NotFound)));
        assert_eq!(parse_id("12").unwrap(), 12);
    }
}
