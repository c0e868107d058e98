//! Events produced while a turn executes, and the reduced turn result.
//!
//! An [`AgentEvent`] is one incremental unit of agent output. Events are
//! ephemeral: the executor inspects them in stream order and retains only
//! the content of the last terminal event, which becomes the [`TurnResult`].

use serde::{Deserialize, Serialize};

/// One unit of output produced incrementally by the agent during a turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentEvent {
    /// Whether this event ends the turn's production.
    pub terminal: bool,
    /// Optional textual payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl AgentEvent {
    /// A non-terminal event, optionally carrying intermediate text
    /// (reasoning traces, tool chatter).
    pub fn progress(content: impl Into<Option<String>>) -> Self {
        Self {
            terminal: false,
            content: content.into(),
        }
    }

    /// A terminal event carrying the turn's answer text.
    pub fn final_text(content: impl Into<String>) -> Self {
        Self {
            terminal: true,
            content: Some(content.into()),
        }
    }

    /// A terminal event with no payload — ends the turn without an answer.
    pub fn final_empty() -> Self {
        Self {
            terminal: true,
            content: None,
        }
    }

    /// The trimmed answer carried by this event.
    ///
    /// Returns `Some` only for terminal events whose content is non-empty
    /// after whitespace trimming; everything else contributes no answer.
    pub fn answer_text(&self) -> Option<&str> {
        if !self.terminal {
            return None;
        }
        self.content
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// The final textual answer of one turn.
///
/// An absent answer is a valid "no answer produced" outcome, distinct from a
/// turn failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    /// The last terminal event's trimmed content, if any event carried one.
    pub answer: Option<String>,
}

impl TurnResult {
    /// A turn that produced no answer.
    pub fn empty() -> Self {
        Self { answer: None }
    }

    /// A turn that produced `text`.
    pub fn answered(text: impl Into<String>) -> Self {
        Self {
            answer: Some(text.into()),
        }
    }

    /// The answer text, or `""` when no answer was produced. This is the
    /// form returned to HTTP callers.
    pub fn text(&self) -> &str {
        self.answer.as_deref().unwrap_or_default()
    }

    /// Whether the turn produced no answer.
    pub fn is_empty(&self) -> bool {
        self.answer.is_none()
    }
}
