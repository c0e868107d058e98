//! Role-tagged conversation messages.

use serde::{Deserialize, Serialize};

/// Originator of a piece of conversation text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human asking questions.
    User,
    /// The agent answering them.
    Model,
}

/// One piece of submitted text, tagged with the role it originated from.
///
/// Immutable once constructed — fields are private and there are no setters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    role: Role,
    text: String,
}

impl Utterance {
    /// A user-originated utterance.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// A model-originated utterance (the agent's reply, once recorded into
    /// session history).
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }

    /// Who produced this text.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The text itself.
    pub fn text(&self) -> &str {
        &self.text
    }
}
