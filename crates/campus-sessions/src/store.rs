//! Session objects and the store that owns them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::RwLock;
use tracing::{debug, info};

use campus_core::errors::SessionError;
use campus_core::ids::SessionKey;
use campus_core::messages::Utterance;

/// One registered conversational session.
///
/// Created empty; conversation history accumulates inside it as a side
/// effect of turn execution (the agent appends both sides of each exchange).
/// The store owns sessions exclusively — callers hold `Arc`s only for the
/// duration of an operation.
pub struct Session {
    key: SessionKey,
    created_at: DateTime<Utc>,
    history: RwLock<Vec<Utterance>>,
}

impl Session {
    fn new(key: SessionKey) -> Self {
        Self {
            key,
            created_at: Utc::now(),
            history: RwLock::new(Vec::new()),
        }
    }

    /// The key this session is registered under.
    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    /// When the session was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append one utterance to the conversation history.
    pub fn append(&self, utterance: Utterance) {
        self.history.write().push(utterance);
    }

    /// Snapshot of the conversation history in order.
    pub fn history(&self) -> Vec<Utterance> {
        self.history.read().clone()
    }

    /// Number of utterances recorded so far.
    pub fn history_len(&self) -> usize {
        self.history.read().len()
    }
}

/// In-memory store of sessions keyed by [`SessionKey`].
///
/// All three operations are atomic with respect to a single key: the map's
/// per-entry locking means a concurrent `get` can never observe a
/// half-constructed session, and operations on distinct keys do not block
/// each other.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<SessionKey, Arc<Session>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a new session under `key`.
    ///
    /// Rejects with [`SessionError::AlreadyExists`] if `key` is live — an
    /// overwrite would silently destroy accumulated history.
    pub fn create(&self, key: SessionKey) -> Result<Arc<Session>, SessionError> {
        match self.sessions.entry(key) {
            Entry::Occupied(occupied) => {
                Err(SessionError::AlreadyExists(occupied.key().clone()))
            }
            Entry::Vacant(vacant) => {
                let session = Arc::new(Session::new(vacant.key().clone()));
                info!(session = %session.key(), "session created");
                let _ = vacant.insert(Arc::clone(&session));
                Ok(session)
            }
        }
    }

    /// Fetch the session registered under `key`.
    pub fn get(&self, key: &SessionKey) -> Result<Arc<Session>, SessionError> {
        self.sessions
            .get(key)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| SessionError::NotFound(key.clone()))
    }

    /// Remove the session registered under `key`. Subsequent `get`s on the
    /// key fail with [`SessionError::NotFound`].
    pub fn delete(&self, key: &SessionKey) -> Result<(), SessionError> {
        match self.sessions.remove(key) {
            Some(_) => {
                info!(session = %key, "session deleted");
                Ok(())
            }
            None => {
                debug!(session = %key, "delete on unknown session");
                Err(SessionError::NotFound(key.clone()))
            }
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
