//! Session identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Composite identity of one conversational session.
///
/// All three components are opaque strings; uniqueness is enforced on the
/// full triple, so the same session name under two different users names two
/// distinct sessions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    app_name: String,
    user_id: String,
    session_id: String,
}

impl SessionKey {
    /// Build a key from its three components.
    pub fn new(
        app_name: impl Into<String>,
        user_id: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            user_id: user_id.into(),
            session_id: session_id.into(),
        }
    }

    /// Application the session belongs to.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// User the session belongs to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Caller-chosen session identifier.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

impl fmt::Display for SessionKey {
    /// Formats as `user/{user_id}/session/{session_id}` — the path form used
    /// in client-facing messages. The app name is a deployment constant and
    /// is deliberately omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user/{}/session/{}", self.user_id, self.session_id)
    }
}
