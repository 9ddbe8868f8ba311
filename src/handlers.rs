use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::models::{ChatRequest, ErrorResponse};
use crate::relay::RelayError;
use crate::state::AppState;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> axum::response::Response {
    match state
        .relay
        .respond(&request.message, &request.conversation_history)
        .await
    {
        Ok(response) => Json(response).into_response(),
        Err(error) => {
            tracing::error!("Relay error: {}", error);
            error.into_response()
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        // An upstream rejection is an expected outcome: the caller gets the
        // upstream's own status code and raw body inside a success response.
        // Transport and parse failures are this service's fault and map to
        // 502 with the same body shape.
        let (status, body) = match self {
            RelayError::UpstreamRejection { status, details } => {
                (StatusCode::OK, ErrorResponse { error: status, details })
            }
            RelayError::Transport(error) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse {
                    error: StatusCode::BAD_GATEWAY.as_u16(),
                    details: error.to_string(),
                },
            ),
            RelayError::MalformedReply(details) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse {
                    error: StatusCode::BAD_GATEWAY.as_u16(),
                    details,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
