//! Shared application state, constructed once at startup and passed to
//! handlers explicitly.

use std::sync::Arc;

use campus_core::ids::SessionKey;
use campus_runtime::TurnExecutor;
use campus_sessions::SessionStore;

/// Everything the request handlers need.
#[derive(Clone)]
pub struct AppState {
    app_name: Arc<str>,
    store: Arc<SessionStore>,
    executor: Arc<TurnExecutor>,
}

impl AppState {
    /// Assemble the state from its parts.
    pub fn new(
        app_name: impl Into<Arc<str>>,
        store: Arc<SessionStore>,
        executor: Arc<TurnExecutor>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            store,
            executor,
        }
    }

    /// The session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The turn executor.
    pub fn executor(&self) -> &TurnExecutor {
        &self.executor
    }

    /// Build the full session key for a request's user and session name.
    /// The application name is a deployment constant, not caller-supplied.
    pub fn session_key(&self, username: &str, session_name: &str) -> SessionKey {
        SessionKey::new(self.app_name.as_ref(), username, session_name)
    }
}
