use serde::{Deserialize, Serialize};

/// One message in a conversation, as supplied by the caller. Roles are
/// forwarded verbatim, never validated or normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<Turn>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Failure shape served to the caller: the upstream HTTP status and the raw
/// upstream body text.
#[derive(Debug, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: u16,
    pub details: String,
}
