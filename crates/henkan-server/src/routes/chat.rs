//! Chat Routes - Keyword assistant

use axum::{extract::State, routing::post, Json, Router};

use crate::models::{ChatRequest, ChatResponse};
use crate::AppState;

/// Ask the conversion assistant
#[utoipa::path(
    post,
    path = "/henkan/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 401, description = "Missing or invalid API key")
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = state.chat_service.reply(&payload.query);
    Json(ChatResponse { reply })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/henkan/chat", post(chat))
}
