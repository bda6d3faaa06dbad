//! In-memory session store and the middleware that assigns session ids.
//!
//! # Design
//! The store maps a session id to a slot holding an opaque JSON blob. Handlers
//! never see the blob: [`SessionStore::with_session`] rebuilds a
//! [`TodoLists`] from it, hands the collection to the handler's closure, and
//! writes the result back. Each slot has its own lock, held for that whole
//! cycle, so two requests never mutate the same session at once while
//! requests for different sessions proceed independently.
//!
//! Sessions idle for longer than the store's TTL are evicted whenever a new
//! session is started, and an expired id is treated as unknown.

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use todos_core::{SessionRecord, TodoLists};
use uuid::Uuid;

use crate::error::AppError;
use crate::AppState;

/// 31 days.
pub const SESSION_MAX_AGE_SECS: u64 = 31 * 24 * 60 * 60;

/// Identifier of one browser session, carried in a cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
struct Slot {
    /// `None` until the first save.
    blob: Option<String>,
    touched: Instant,
}

impl Slot {
    fn new() -> Self {
        Self {
            blob: None,
            touched: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.duration_since(self.touched) >= ttl
    }
}

type Slots = HashMap<String, Arc<Mutex<Slot>>>;

#[derive(Debug, Clone)]
pub struct SessionStore {
    slots: Arc<RwLock<Slots>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(Duration::from_secs(SESSION_MAX_AGE_SECS))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose sessions expire after `ttl` without a request.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slots: Arc::default(),
            ttl,
        }
    }

    /// Start a new, empty session and return its id.
    pub async fn create(&self) -> SessionId {
        let id = SessionId(Uuid::new_v4().to_string());
        let mut slots = self.slots.write().await;
        self.evict_expired(&mut slots);
        slots.insert(id.0.clone(), Arc::new(Mutex::new(Slot::new())));
        id
    }

    /// The id if the store knows it and it has not expired.
    pub async fn find(&self, raw: &str) -> Option<SessionId> {
        let slot = self.slots.read().await.get(raw).cloned()?;
        let mut slot = slot.lock().await;
        let now = Instant::now();
        if slot.is_expired(self.ttl, now) {
            drop(slot);
            self.slots.write().await.remove(raw);
            return None;
        }
        slot.touched = now;
        Some(SessionId(raw.to_string()))
    }

    /// Load the session's lists, run `f` on them, and persist the result.
    ///
    /// Nothing is written back when `f` fails.
    pub async fn with_session<T>(
        &self,
        id: &SessionId,
        f: impl FnOnce(&mut TodoLists) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let slot = self.slot(id).await;
        let mut slot = slot.lock().await;
        slot.touched = Instant::now();

        let mut lists = match slot.blob.as_deref() {
            Some(blob) => {
                let record: SessionRecord = serde_json::from_str(blob)?;
                TodoLists::from_record(record).map_err(|err| AppError::Session(err.to_string()))?
            }
            None => TodoLists::new(),
        };

        let out = f(&mut lists)?;

        slot.blob = Some(serde_json::to_string(&lists.to_record())?);
        Ok(out)
    }

    async fn slot(&self, id: &SessionId) -> Arc<Mutex<Slot>> {
        if let Some(slot) = self.slots.read().await.get(id.as_str()) {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write().await;
        Arc::clone(
            slots
                .entry(id.0.clone())
                .or_insert_with(|| Arc::new(Mutex::new(Slot::new()))),
        )
    }

    /// Drop idle sessions. A slot locked by an in-flight request is kept.
    fn evict_expired(&self, slots: &mut Slots) {
        let now = Instant::now();
        let before = slots.len();
        slots.retain(|_, slot| match slot.try_lock() {
            Ok(slot) => !slot.is_expired(self.ttl, now),
            Err(_) => true,
        });
        let evicted = before - slots.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = slots.len(), "expired sessions evicted");
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }

    #[cfg(test)]
    async fn put_raw(&self, id: &SessionId, blob: impl Into<String>) {
        self.slot(id).await.lock().await.blob = Some(blob.into());
    }
}

/// Value of the named cookie in the `Cookie` header, if present.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

pub fn set_cookie_value(name: &str, id: &SessionId) -> String {
    format!(
        "{name}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}",
        id.as_str()
    )
}

/// Attach a [`SessionId`] to every request, starting a session when the
/// cookie is missing or names a session the store does not know.
pub async fn session_layer(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let cookie_name: &str = &state.session_cookie;
    let raw = cookie_value(req.headers(), cookie_name).map(str::to_owned);
    let known = match raw {
        Some(raw) => state.sessions.find(&raw).await,
        None => None,
    };

    let (id, is_new) = match known {
        Some(id) => (id, false),
        None => {
            let id = state.sessions.create().await;
            tracing::debug!(session = id.as_str(), "session started");
            (id, true)
        }
    };

    req.extensions_mut().insert(id.clone());
    let mut response = next.run(req).await;

    if is_new {
        match HeaderValue::from_str(&set_cookie_value(cookie_name, &id)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(err) => tracing::warn!(error = %err, "session cookie not representable"),
        }
    }
    response
}
