use axum::{Json, extract::State};
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, LivenessResponse},
    state::SharedState,
};

pub const LIVENESS_MESSAGE: &str = "Japan Assist API is live!";

pub async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if payload.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".to_string()));
    }

    let span = tracing::info_span!("chat", request_id = %Uuid::new_v4(), lang = %payload.lang);

    async {
        // Text first; a failure here means synthesis is never attempted.
        let text = state.completion.complete(&payload.text, &payload.lang).await?;

        let audio_base64 = state
            .speech
            .synthesize(&text, &payload.lang)
            .await?
            .map(|audio| STANDARD.encode(audio));

        tracing::info!(
            text_len = text.len(),
            with_audio = audio_base64.is_some(),
            "chat reply ready"
        );

        Ok::<_, AppError>(Json(ChatResponse { text, audio_base64 }))
    }
    .instrument(span)
    .await
}
