//! Serialized shapes exchanged with the session store.
//!
//! # Design
//! These records are plain data with public fields and serde derives. They
//! carry no invariants of their own; entities are rebuilt from them through
//! `TryFrom`, which validates every field. The id counters default to zero
//! when absent, and reconstruction then derives them from the highest id
//! present, so blobs written without counters still load.

use serde::{Deserialize, Serialize};

/// One todo as stored in a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// One todo list and its ledger as stored in a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoListRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub todos: Vec<TodoRecord>,
    #[serde(default)]
    pub next_todo_id: u64,
}

/// Everything a session holds: the lists in insertion order plus the list
/// id counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    #[serde(default)]
    pub todo_lists: Vec<TodoListRecord>,
    #[serde(default)]
    pub next_list_id: u64,
}
