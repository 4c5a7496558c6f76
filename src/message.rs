// src/message.rs
use serde::{Deserialize, Serialize};

use crate::services::language::DEFAULT_LANG;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub text: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub text: String,
    /// Always serialized; `null` when speech synthesis was skipped.
    pub audio_base64: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}
