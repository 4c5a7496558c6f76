// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, liveness_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(liveness_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

/// Full application: routes, state and the open cross-origin policy.
pub fn build_app(state: SharedState) -> Router {
    // Mirrors origin and headers so credentialed browser requests are accepted.
    let cors = CorsLayer::very_permissive();

    create_router().with_state(state).layer(cors)
}
