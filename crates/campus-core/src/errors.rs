//! Error hierarchy shared across the campus crates.
//!
//! Session lifecycle and turn execution report checked errors — "not found"
//! is an ordinary outcome of `get`, not a caught panic or a stringly status.
//! Agent failures are never swallowed: whatever the agent raised travels up
//! as the `source` of an [`AgentError`].

use std::error::Error as StdError;
use std::time::Duration;

use thiserror::Error;

use crate::ids::SessionKey;

/// Session lifecycle failures from the store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session is registered under the key.
    #[error("Session not found: {0}")]
    NotFound(SessionKey),

    /// A live session is already registered under the key.
    #[error("Session already exists: {0}")]
    AlreadyExists(SessionKey),
}

/// A failure raised by the agent process while producing events.
///
/// Carries the underlying cause for diagnostics; the turn that observed it
/// is aborted with no result.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AgentError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AgentError {
    /// An agent failure described only by a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// An agent failure with the underlying cause attached.
    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Turn execution failures.
#[derive(Debug, Error)]
pub enum TurnError {
    /// The key resolved to no session; the agent was never invoked.
    #[error("Session not found: {0}")]
    SessionNotFound(SessionKey),

    /// The agent process failed mid-stream. The turn is aborted and no
    /// result is committed.
    #[error("agent execution failed: {0}")]
    Agent(#[from] AgentError),

    /// The configured turn deadline elapsed before the event stream drained.
    #[error("turn did not complete within {0:?}")]
    DeadlineExceeded(Duration),
}
