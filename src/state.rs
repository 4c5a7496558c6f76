// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::completion::{CompletionClient, OpenAiClient};
use crate::services::http_client::http_client;
use crate::services::knowledge;
use crate::services::speech::SpeechOutput;

pub type SharedState = Arc<AppState>;

/// Everything a request needs, built once and read-only afterwards.
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub speech: SpeechOutput,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>, speech: SpeechOutput) -> Self {
        Self { completion, speech }
    }

    /// Wire the real adapters. Configuration problems only degrade features.
    pub async fn from_config(config: &AppConfig) -> reqwest::Result<Self> {
        let client = http_client(config.http_timeout)?;
        let knowledge = Arc::new(knowledge::load_or_empty(&config.recommendations_path).await);

        if config.openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; chat requests will fail");
        }

        let completion = OpenAiClient::new(
            client.clone(),
            config.openai_base_url.as_str(),
            config.openai_model.as_str(),
            config.openai_api_key.clone(),
            knowledge,
        );
        let speech = SpeechOutput::from_credentials(
            client,
            &config.tts_base_url,
            config.google_credentials_json.as_ref(),
        );

        Ok(Self::new(Arc::new(completion), speech))
    }
}
