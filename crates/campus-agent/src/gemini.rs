//! Gemini agent implementing the [`Agent`] trait.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream;
use tracing::{debug, instrument, warn};

use campus_core::errors::AgentError;
use campus_core::events::AgentEvent;
use campus_core::messages::Utterance;
use campus_runtime::{Agent, AgentEventStream};
use campus_sessions::Session;

use crate::types::{Content, GeminiConfig, GenerateContentRequest, GenerateContentResponse};

/// Conversational agent backed by the Gemini `generateContent` API.
///
/// Stateless between turns: all conversation state lives in the session's
/// history, which this agent reads in full on every call and extends with
/// both sides of the exchange.
pub struct GeminiAgent {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiAgent {
    /// Create an agent with its own HTTP client.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create an agent with a shared HTTP client.
    pub fn with_client(config: GeminiConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url(),
            self.config.model
        )
    }

    async fn generate(&self, contents: Vec<Content>) -> Result<GenerateContentResponse, AgentError> {
        let request = GenerateContentRequest { contents };
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::with_source("Gemini request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini API returned an error");
            return Err(AgentError::new(format!(
                "Gemini API error ({status}): {body}"
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| AgentError::with_source("invalid Gemini response body", e))
    }
}

#[async_trait]
impl Agent for GeminiAgent {
    fn name(&self) -> &str {
        &self.config.model
    }

    /// One turn: record the utterance, send the full history upstream, and
    /// surface the reply as a single terminal event. The reply (when
    /// present) is recorded into the history before the stream is returned,
    /// so a later turn sees both sides of this exchange.
    #[instrument(skip_all, fields(model = %self.config.model, session = %session.key()))]
    async fn run(
        &self,
        session: Arc<Session>,
        utterance: Utterance,
    ) -> Result<AgentEventStream, AgentError> {
        session.append(utterance);
        let contents: Vec<Content> = session.history().iter().map(Content::from).collect();
        debug!(turns = contents.len(), "calling generateContent");

        let response = self.generate(contents).await?;

        let event = match response.first_text() {
            Some(text) => {
                session.append(Utterance::model(text));
                AgentEvent::final_text(text)
            }
            None => {
                debug!("no candidate text in response");
                AgentEvent::final_empty()
            }
        };
        Ok(Box::pin(stream::iter(vec![Ok(event)])))
    }
}
