//! # campus-server
//!
//! HTTP surface for the Campus agent service: three POST endpoints over the
//! session store and turn executor.
//!
//! | Route            | Does                                           |
//! |------------------|------------------------------------------------|
//! | `/start_session` | register a session for (user, session name)    |
//! | `/ask`           | execute one turn and return the final answer   |
//! | `/end_session`   | delete the session                             |
//!
//! Handlers validate field presence before touching the core, and map core
//! errors to statuses: missing field → 400, already exists → 409, session
//! not found on ask → 404, everything else → 500.

#![deny(unsafe_code)]

pub mod errors;
pub mod handlers;
pub mod state;

use axum::Router;
use axum::routing::post;
use tower_http::trace::TraceLayer;

pub use errors::ApiError;
pub use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/start_session", post(handlers::start_session))
        .route("/ask", post(handlers::ask))
        .route("/end_session", post(handlers::end_session))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
