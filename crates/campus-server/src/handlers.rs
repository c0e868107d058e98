//! Request handlers for the three session endpoints.
//!
//! Field validation happens here, before the store or executor is touched:
//! a missing *or empty* field fails with 400 and the same error text the
//! original service used. Note the asymmetry on `/end_session` — a delete
//! of an unknown session is a 500, not a 404; all delete failures are
//! reported uniformly.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use campus_core::errors::{SessionError, TurnError};
use campus_core::messages::Utterance;

use crate::errors::ApiError;
use crate::state::AppState;

/// Body of `/start_session` and `/end_session`.
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    /// User the session belongs to.
    pub username: Option<String>,
    /// Caller-chosen session name.
    pub session_name: Option<String>,
}

/// Body of `/ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// User the session belongs to.
    pub username: Option<String>,
    /// Caller-chosen session name.
    pub session_name: Option<String>,
    /// The question to put to the agent.
    pub question: Option<String>,
}

/// Successful `/start_session` response.
#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    /// Echo of the requested user.
    pub user_id: String,
    /// Echo of the requested session name.
    pub session_id: String,
    /// Human-readable confirmation.
    pub message: String,
}

/// Successful `/ask` response.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Echo of the requested user.
    pub user_id: String,
    /// Echo of the requested session name.
    pub session_id: String,
    /// The agent's final answer — empty string when the turn produced none.
    pub response: String,
}

/// Successful `/end_session` response.
#[derive(Debug, Serialize)]
pub struct EndSessionResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// A field counts as present only if it is non-empty.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// `POST /start_session` — register a new session.
#[instrument(skip_all)]
pub async fn start_session(
    State(state): State<AppState>,
    Json(body): Json<SessionRequest>,
) -> Result<Json<StartSessionResponse>, ApiError> {
    let (Some(username), Some(session_name)) =
        (present(body.username.as_ref()), present(body.session_name.as_ref()))
    else {
        return Err(ApiError::BadRequest(
            "Missing 'username' or 'session_name'".to_owned(),
        ));
    };

    let key = state.session_key(username, session_name);
    let _ = state.store().create(key).map_err(|err| match err {
        SessionError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
        SessionError::NotFound(_) => ApiError::Internal(err.to_string()),
    })?;

    Ok(Json(StartSessionResponse {
        user_id: username.to_owned(),
        session_id: session_name.to_owned(),
        message: format!("Session created: user/{username}/session/{session_name}"),
    }))
}

/// `POST /ask` — execute one turn against an existing session.
#[instrument(skip_all)]
pub async fn ask(
    State(state): State<AppState>,
    Json(body): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let (Some(username), Some(session_name), Some(question)) = (
        present(body.username.as_ref()),
        present(body.session_name.as_ref()),
        present(body.question.as_ref()),
    ) else {
        return Err(ApiError::BadRequest(
            "Missing 'username', 'session_name', or 'question'".to_owned(),
        ));
    };

    let key = state.session_key(username, session_name);
    let result = state
        .executor()
        .execute(&key, Utterance::user(question))
        .await
        .map_err(|err| match err {
            TurnError::SessionNotFound(key) => {
                ApiError::NotFound(format!("Session not found: {key}"))
            }
            other => ApiError::Internal(other.to_string()),
        })?;

    Ok(Json(AskResponse {
        user_id: username.to_owned(),
        session_id: session_name.to_owned(),
        response: result.text().to_owned(),
    }))
}

/// `POST /end_session` — delete a session.
#[instrument(skip_all)]
pub async fn end_session(
    State(state): State<AppState>,
    Json(body): Json<SessionRequest>,
) -> Result<Json<EndSessionResponse>, ApiError> {
    let (Some(username), Some(session_name)) =
        (present(body.username.as_ref()), present(body.session_name.as_ref()))
    else {
        return Err(ApiError::BadRequest(
            "Missing 'username' or 'session_name'".to_owned(),
        ));
    };

    let key = state.session_key(username, session_name);
    state
        .store()
        .delete(&key)
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(Json(EndSessionResponse {
        message: format!("Session deleted: user/{username}/session/{session_name}"),
    }))
}
