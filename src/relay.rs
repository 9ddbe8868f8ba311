use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{RelayMode, Settings};
use crate::models::{ChatResponse, Turn};

pub const ROLE_USER: &str = "user";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Upstream rejected the request with status {status}")]
    UpstreamRejection { status: u16, details: String },

    #[error("Request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned success with an unusable body: {0}")]
    MalformedReply(String),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct UpstreamRequest<'a> {
    pub messages: Vec<Turn>,
    pub model: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
struct UpstreamReply {
    choices: Vec<UpstreamChoice>,
}

#[derive(Debug, Deserialize)]
struct UpstreamChoice {
    message: UpstreamMessage,
}

#[derive(Debug, Deserialize)]
struct UpstreamMessage {
    content: String,
}

/// Forwards one chat message (plus prior turns, in history-aware mode) to the
/// configured chat-completion endpoint and maps the result back.
pub struct ChatRelay {
    client: reqwest::Client,
    settings: Settings,
}

impl ChatRelay {
    pub fn new(settings: Settings) -> Self {
        ChatRelay {
            client: reqwest::Client::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Builds the upstream body: prior turns in order, then the new message
    /// appended as a final user turn. Model and generation parameters come
    /// from settings, never from the caller.
    pub fn build_request(&self, message: &str, history: &[Turn]) -> UpstreamRequest<'_> {
        let history = match self.settings.relay_mode {
            RelayMode::Stateless => &[],
            RelayMode::HistoryAware => history,
        };

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.extend_from_slice(history);
        messages.push(Turn {
            role: ROLE_USER.to_string(),
            content: message.to_string(),
        });

        UpstreamRequest {
            messages,
            model: &self.settings.model_name,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    /// One outbound call per invocation; no retries, no caching, no timeout
    /// beyond the transport default.
    pub async fn respond(
        &self,
        message: &str,
        history: &[Turn],
    ) -> Result<ChatResponse, RelayError> {
        let request = self.build_request(message, history);
        tracing::debug!(
            "Forwarding {} turns upstream to model {}",
            request.messages.len(),
            request.model
        );

        let response = self
            .client
            .post(&self.settings.api_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        map_reply(status, body)
    }
}

/// Status 200 yields `choices[0].message.content`; anything else is surfaced
/// with the upstream's own status code and raw body text, never re-parsed.
fn map_reply(status: u16, body: String) -> Result<ChatResponse, RelayError> {
    if status != 200 {
        return Err(RelayError::UpstreamRejection {
            status,
            details: body,
        });
    }

    let reply: UpstreamReply =
        serde_json::from_str(&body).map_err(|e| RelayError::MalformedReply(e.to_string()))?;

    reply
        .choices
        .into_iter()
        .next()
        .map(|choice| ChatResponse {
            reply: choice.message.content,
        })
        .ok_or_else(|| RelayError::MalformedReply("no choices in reply".to_string()))
}
