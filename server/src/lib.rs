//! HTTP front end for the todo core.
//!
//! # Overview
//! An axum router exposing the todo lists of the caller's session as JSON.
//! Sessions are identified by a cookie and kept in an in-memory
//! [`SessionStore`]; every request reloads the session's lists, applies one
//! change through `todos_core`, and stores the result.

pub mod config;
pub mod error;
pub mod handlers;
pub mod session;
pub mod views;

use std::{sync::Arc, time::Instant};

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;

pub use config::{Config, ConfigError};
pub use error::AppError;
pub use session::{SessionId, SessionStore};
pub use views::{ListResponse, ListSummary, ListView, ListsPage, MessageResponse, TodoView};

/// Shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub session_cookie: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: SessionStore::new(),
            session_cookie: Arc::from(config.session_cookie.as_str()),
        }
    }
}

pub fn app(config: &Config) -> Router {
    router(AppState::new(config))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/lists",
            get(handlers::list_todo_lists).post(handlers::create_todo_list),
        )
        .route("/lists/{list_id}", get(handlers::show_todo_list))
        .route("/lists/{list_id}/edit", post(handlers::edit_todo_list))
        .route("/lists/{list_id}/destroy", post(handlers::destroy_todo_list))
        .route("/lists/{list_id}/complete_all", post(handlers::complete_all))
        .route("/lists/{list_id}/todos", post(handlers::create_todo))
        .route(
            "/lists/{list_id}/todos/{todo_id}/toggle",
            post(handlers::toggle_todo),
        )
        .route(
            "/lists/{list_id}/todos/{todo_id}/destroy",
            post(handlers::destroy_todo),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::session_layer,
        ))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// One log line per request.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

pub async fn run(listener: TcpListener, config: &Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}
