//! Turn executor — reduces an agent's event stream to one final answer.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tracing::{debug, instrument};

use campus_core::errors::{SessionError, TurnError};
use campus_core::events::TurnResult;
use campus_core::ids::SessionKey;
use campus_core::messages::Utterance;
use campus_sessions::{Session, SessionStore};

use crate::agent::Agent;

/// Executes exactly one conversational turn against an existing session.
///
/// A turn: validate that the session exists, hand the utterance to the
/// agent, drain the resulting event stream to exhaustion, and keep the
/// content of the *last* terminal event that carried any. The caller is not
/// answered until the stream is fully drained, so the asynchronous
/// multi-event production collapses into one synchronous request/response
/// exchange.
///
/// No retries: a turn either completes once or fails.
pub struct TurnExecutor {
    store: Arc<SessionStore>,
    agent: Arc<dyn Agent>,
    deadline: Option<Duration>,
}

impl TurnExecutor {
    /// Build an executor with no turn deadline — a hung agent blocks its
    /// turn indefinitely, matching the unbounded wait of the upstream
    /// behavior.
    pub fn new(store: Arc<SessionStore>, agent: Arc<dyn Agent>) -> Self {
        Self {
            store,
            agent,
            deadline: None,
        }
    }

    /// Bound each turn to `deadline`. Overrunning turns fail with
    /// [`TurnError::DeadlineExceeded`].
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Execute one turn.
    ///
    /// Fails with [`TurnError::SessionNotFound`] before the agent is ever
    /// invoked if `key` resolves to no session. An agent failure — at setup
    /// or mid-stream — aborts the turn with the cause attached; no result
    /// is committed, though the session's history may already reflect
    /// whatever the agent mutated before failing.
    #[instrument(skip(self, utterance), fields(session = %key, agent = self.agent.name()))]
    pub async fn execute(
        &self,
        key: &SessionKey,
        utterance: Utterance,
    ) -> Result<TurnResult, TurnError> {
        let session = self.store.get(key).map_err(|err| match err {
            SessionError::NotFound(k) | SessionError::AlreadyExists(k) => {
                TurnError::SessionNotFound(k)
            }
        })?;

        match self.deadline {
            Some(limit) => tokio::time::timeout(limit, self.drive(session, utterance))
                .await
                .map_err(|_| TurnError::DeadlineExceeded(limit))?,
            None => self.drive(session, utterance).await,
        }
    }

    /// Drain the agent's event stream and keep the last qualifying answer.
    async fn drive(
        &self,
        session: Arc<Session>,
        utterance: Utterance,
    ) -> Result<TurnResult, TurnError> {
        let mut events = self.agent.run(session, utterance).await?;

        let mut answer: Option<String> = None;
        let mut seen = 0_usize;
        while let Some(event) = events.next().await {
            let event = event?;
            seen += 1;
            // Later terminal events overwrite earlier ones; the last one
            // in stream order determines the result.
            if let Some(text) = event.answer_text() {
                answer = Some(text.to_owned());
            }
        }

        debug!(events = seen, answered = answer.is_some(), "turn drained");
        Ok(TurnResult { answer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use futures::stream;

    use campus_core::errors::AgentError;
    use campus_core::events::AgentEvent;

    use crate::agent::AgentEventStream;

    /// Replays a fixed event script, optionally failing after `fail_after`
    /// events have been yielded. Appends the utterance to session history to
    /// mimic a real agent's side effects.
    struct ScriptedAgent {
        events: Vec<AgentEvent>,
        fail_after: Option<usize>,
        invocations: AtomicUsize,
    }

    impl ScriptedAgent {
        fn new(events: Vec<AgentEvent>) -> Self {
            Self {
                events,
                fail_after: None,
                invocations: AtomicUsize::new(0),
            }
        }

        fn failing_after(events: Vec<AgentEvent>, yielded: usize) -> Self {
            Self {
                fail_after: Some(yielded),
                ..Self::new(events)
            }
        }

        fn invocations(&self) -> usize {
            self.invocations.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Agent for ScriptedAgent {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn run(
            &self,
            session: Arc<Session>,
            utterance: Utterance,
        ) -> Result<AgentEventStream, AgentError> {
            let _ = self.invocations.fetch_add(1, Ordering::SeqCst);
            session.append(utterance);

            let mut items: Vec<Result<AgentEvent, AgentError>> = self
                .events
                .iter()
                .cloned()
                .map(Ok)
                .collect();
            if let Some(n) = self.fail_after {
                items.truncate(n);
                items.push(Err(AgentError::new("model exploded")));
            }
            Ok(Box::pin(stream::iter(items)))
        }
    }

    /// Never yields within any reasonable test window.
    struct StalledAgent;

    #[async_trait]
    impl Agent for StalledAgent {
        fn name(&self) -> &str {
            "stalled"
        }

        async fn run(
            &self,
            _session: Arc<Session>,
            _utterance: Utterance,
        ) -> Result<AgentEventStream, AgentError> {
            let s = async_stream::stream! {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                yield Ok(AgentEvent::final_text("too late"));
            };
            Ok(Box::pin(s))
        }
    }

    fn key() -> SessionKey {
        SessionKey::new("test_app", "alice", "s1")
    }

    fn executor_with(agent: Arc<dyn Agent>) -> (Arc<SessionStore>, TurnExecutor) {
        let store = Arc::new(SessionStore::new());
        let executor = TurnExecutor::new(Arc::clone(&store), agent);
        (store, executor)
    }

    #[tokio::test]
    async fn last_terminal_content_becomes_the_answer() {
        let agent = Arc::new(ScriptedAgent::new(vec![
            AgentEvent::progress(None),
            AgentEvent::progress(Some("looking it up".to_owned())),
            AgentEvent::final_text("Deadline is Jan 15."),
        ]));
        let (store, executor) = executor_with(agent);
        let _ = store.create(key()).unwrap();

        let result = executor
            .execute(&key(), Utterance::user("What is the application deadline?"))
            .await
            .unwrap();
        assert_eq!(result.text(), "Deadline is Jan 15.");
    }

    #[tokio::test]
    async fn multiple_terminal_events_last_wins() {
        let agent = Arc::new(ScriptedAgent::new(vec![
            AgentEvent::final_text("first draft"),
            AgentEvent::progress(None),
            AgentEvent::final_text("final answer"),
        ]));
        let (store, executor) = executor_with(agent);
        let _ = store.create(key()).unwrap();

        let result = executor.execute(&key(), Utterance::user("q")).await.unwrap();
        assert_eq!(result.text(), "final answer");
    }

    #[tokio::test]
    async fn contentless_terminal_does_not_clear_prior_answer() {
        let agent = Arc::new(ScriptedAgent::new(vec![
            AgentEvent::final_text("kept"),
            AgentEvent::final_empty(),
        ]));
        let (store, executor) = executor_with(agent);
        let _ = store.create(key()).unwrap();

        let result = executor.execute(&key(), Utterance::user("q")).await.unwrap();
        assert_eq!(result.text(), "kept");
    }

    #[tokio::test]
    async fn no_terminal_content_yields_empty_result() {
        let agent = Arc::new(ScriptedAgent::new(vec![
            AgentEvent::progress(None),
            AgentEvent::final_empty(),
        ]));
        let (store, executor) = executor_with(agent);
        let _ = store.create(key()).unwrap();

        let result = executor.execute(&key(), Utterance::user("q")).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(result.text(), "");
    }

    #[tokio::test]
    async fn answer_is_whitespace_trimmed() {
        let agent = Arc::new(ScriptedAgent::new(vec![AgentEvent::final_text(
            "  padded  \n",
        )]));
        let (store, executor) = executor_with(agent);
        let _ = store.create(key()).unwrap();

        let result = executor.execute(&key(), Utterance::user("q")).await.unwrap();
        assert_eq!(result.text(), "padded");
    }

    #[tokio::test]
    async fn unknown_session_fails_without_invoking_agent() {
        let agent = Arc::new(ScriptedAgent::new(vec![AgentEvent::final_text("unused")]));
        let (_store, executor) = executor_with(Arc::clone(&agent) as Arc<dyn Agent>);

        let err = executor
            .execute(&key(), Utterance::user("q"))
            .await
            .unwrap_err();
        assert!(matches!(err, TurnError::SessionNotFound(_)));
        assert_eq!(agent.invocations(), 0);
    }

    #[tokio::test]
    async fn deleted_session_fails_like_never_created() {
        let agent = Arc::new(ScriptedAgent::new(vec![AgentEvent::final_text("a")]));
        let (store, executor) = executor_with(agent);
        let _ = store.create(key()).unwrap();
        store.delete(&key()).unwrap();

        let err = executor
            .execute(&key(), Utterance::user("q"))
            .await
            .unwrap_err();
        assert!(matches!(err, TurnError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn mid_stream_failure_aborts_the_turn() {
        let agent = Arc::new(ScriptedAgent::failing_after(
            vec![
                AgentEvent::progress(None),
                AgentEvent::final_text("never reached"),
            ],
            1,
        ));
        let (store, executor) = executor_with(agent);
        let _ = store.create(key()).unwrap();

        let err = executor
            .execute(&key(), Utterance::user("q"))
            .await
            .unwrap_err();
        match err {
            TurnError::Agent(cause) => assert_eq!(cause.message(), "model exploded"),
            other => panic!("expected agent failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn history_mutation_survives_a_failed_turn() {
        let agent = Arc::new(ScriptedAgent::failing_after(vec![], 0));
        let (store, executor) = executor_with(agent);
        let session = store.create(key()).unwrap();

        let _ = executor
            .execute(&key(), Utterance::user("q"))
            .await
            .unwrap_err();
        // The agent appended the utterance before failing; that side effect
        // is not rolled back.
        assert_eq!(session.history_len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_bounds_a_stalled_turn() {
        let (store, executor) = executor_with(Arc::new(StalledAgent));
        let executor = executor.with_deadline(Duration::from_millis(200));
        let _ = store.create(key()).unwrap();

        let err = executor
            .execute(&key(), Utterance::user("q"))
            .await
            .unwrap_err();
        assert!(matches!(err, TurnError::DeadlineExceeded(_)));
    }

    #[tokio::test]
    async fn turns_on_distinct_sessions_run_concurrently() {
        let agent = Arc::new(ScriptedAgent::new(vec![AgentEvent::final_text("ok")]));
        let (store, executor) = executor_with(agent);
        let executor = Arc::new(executor);
        let k1 = SessionKey::new("test_app", "alice", "s1");
        let k2 = SessionKey::new("test_app", "bob", "s1");
        let _ = store.create(k1.clone()).unwrap();
        let _ = store.create(k2.clone()).unwrap();

        let (r1, r2) = tokio::join!(
            executor.execute(&k1, Utterance::user("q1")),
            executor.execute(&k2, Utterance::user("q2")),
        );
        assert_eq!(r1.unwrap().text(), "ok");
        assert_eq!(r2.unwrap().text(), "ok");
    }
}
