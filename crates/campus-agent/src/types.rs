//! Gemini `generateContent` wire types and configuration.

use serde::{Deserialize, Serialize};

use campus_core::messages::{Role, Utterance};

/// Default base URL for the Gemini API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini agent configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiConfig {
    /// API key (`key` query parameter).
    pub api_key: String,
    /// Model name, e.g. `gemini-2.0-flash`.
    pub model: String,
    /// Base URL override (tests point this at a local mock).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl GeminiConfig {
    /// Config for `model` with the production base URL.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
        }
    }

    /// Effective base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// One text fragment within a content block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// The text itself.
    pub text: String,
}

/// A role-tagged content block — one conversation entry on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// `user` or `model`.
    pub role: Role,
    /// Ordered text parts.
    pub parts: Vec<Part>,
}

impl From<&Utterance> for Content {
    fn from(utterance: &Utterance) -> Self {
        Self {
            role: utterance.role(),
            parts: vec![Part {
                text: utterance.text().to_owned(),
            }],
        }
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Clone, Debug, Serialize)]
pub struct GenerateContentRequest {
    /// Full conversation so far, oldest first.
    pub contents: Vec<Content>,
}

/// One response candidate.
#[derive(Clone, Debug, Deserialize)]
pub struct Candidate {
    /// Generated content, absent on safety blocks.
    pub content: Option<Content>,
    /// Why generation stopped (`STOP`, `MAX_TOKENS`, ...).
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Response body for `models/{model}:generateContent`.
#[derive(Clone, Debug, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidates in ranking order; the first is the answer.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_from_utterance_keeps_role_and_text() {
        let content = Content::from(&Utterance::user("hello"));
        assert_eq!(content.role, Role::User);
        assert_eq!(content.parts, vec![Part {
            text: "hello".to_owned()
        }]);
    }

    #[test]
    fn request_serializes_roles_lowercase() {
        let request = GenerateContentRequest {
            contents: vec![
                Content::from(&Utterance::user("q")),
                Content::from(&Utterance::model("a")),
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][1]["role"], "model");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "q");
    }

    #[test]
    fn first_text_reads_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "answer"}]}, "finishReason": "STOP"}
            ]
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some("answer"));
    }

    #[test]
    fn first_text_handles_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn first_text_handles_blocked_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert_eq!(response.first_text(), None);
    }
}
