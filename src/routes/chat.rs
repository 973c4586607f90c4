use axum::{
    extract::State,
    Json,
};
use crate::{
    message::{ChatRequest, ChatResponse},
    state::SharedState,
    services::{gemini::relay_message, session::new_session_token},
    error::AppError,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    tracing::debug!(session_id = ?payload.session_id, "incoming chat request");

    let message = payload
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing 'message'".to_string()))?;

    let reply = relay_message(&state.config, &state.http, message).await?;

    Ok(Json(ChatResponse {
        reply,
        session_id: new_session_token(),
    }))
}
