//! The agent seam: an asynchronous producer of per-turn events.

use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use futures::Stream;

use campus_core::errors::AgentError;
use campus_core::events::AgentEvent;
use campus_core::messages::Utterance;
use campus_sessions::Session;

/// Boxed, ordered, finite stream of events for one turn.
pub type AgentEventStream = Pin<Box<dyn Stream<Item = Result<AgentEvent, AgentError>> + Send>>;

/// A conversational agent that handles one utterance at a time.
///
/// Each [`run`](Agent::run) call must return a fresh stream: streams are
/// owned by exactly one turn and are never shared or re-entered across
/// concurrent calls. The agent is free to mutate the session's history as a
/// side effect of producing events — that mutation is outside the
/// executor's control and may survive a failed turn.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Stable agent name, used in logs.
    fn name(&self) -> &str;

    /// Begin one turn for `utterance` within `session`.
    ///
    /// The returned stream yields events in production order and is
    /// guaranteed finite per turn. A setup failure (before any event is
    /// produced) is reported here; mid-stream failures travel as `Err`
    /// items.
    async fn run(
        &self,
        session: Arc<Session>,
        utterance: Utterance,
    ) -> Result<AgentEventStream, AgentError>;
}
