// src/services/completion.rs
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::language::{self, LanguageProfile};

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion API key is not configured")]
    MissingApiKey,
    #[error("failed to reach completion service: {0}")]
    Connection(#[from] reqwest::Error),
    #[error("completion service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid completion response: {0}")]
    InvalidResponse(String),
}

/// Turns a user question into the assistant's reply text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, user_text: &str, lang: &str) -> Result<String, CompletionError>;
}

/// Prompt sent as the single user message of a completion request.
pub fn build_prompt(knowledge: &Value, profile: LanguageProfile, user_text: &str) -> String {
    // serde_json keeps non-ASCII characters unescaped
    let local_data = serde_json::to_string(knowledge).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are a tourism assistant in Monterrey, Mexico, for the FIFA World Cup 2026.\n\
         Respond ONLY in {lang}.\n\
         Be helpful, polite, and clear.\n\
         Use the following local data: {local_data}\n\
         User question: {user_text}\n",
        lang = profile.prompt_language,
    )
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [PromptMessage<'a>; 1],
    stream: bool,
}

#[derive(Serialize)]
struct PromptMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI chat completions adapter.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
    knowledge: Arc<Value>,
}

impl OpenAiClient {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<SecretString>,
        knowledge: Arc<Value>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            knowledge,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, user_text: &str, lang: &str) -> Result<String, CompletionError> {
        let api_key = self.api_key.as_ref().ok_or(CompletionError::MissingApiKey)?;

        let profile = language::resolve(lang);
        let prompt = build_prompt(&self.knowledge, profile, user_text);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [PromptMessage {
                role: "user",
                content: &prompt,
            }],
            stream: false,
        };

        tracing::debug!(
            model = %self.model,
            lang = profile.code,
            prompt_len = prompt.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::InvalidResponse("no completion content".to_string()))
    }
}
