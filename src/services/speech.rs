// src/services/speech.rs
use std::sync::Arc;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::google_auth::{AuthError, ServiceAccountAuth, ServiceAccountKey};
use super::language;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech authentication failed: {0}")]
    Auth(#[from] AuthError),
    #[error("failed to reach speech service: {0}")]
    Connection(#[from] reqwest::Error),
    #[error("speech service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("invalid speech response: {0}")]
    InvalidResponse(String),
}

/// Converts reply text into encoded audio.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, SpeechError>;
}

/// Speech capability, decided once at startup.
#[derive(Clone)]
pub enum SpeechOutput {
    Enabled(Arc<dyn SpeechSynthesizer>),
    Disabled,
}

impl SpeechOutput {
    /// Google TTS when usable credentials are supplied, otherwise disabled.
    pub fn from_credentials(
        client: Client,
        base_url: &str,
        credentials: Option<&SecretString>,
    ) -> Self {
        let Some(credentials) = credentials else {
            tracing::warn!("no speech credentials configured; responses will not include audio");
            return Self::Disabled;
        };

        let auth = ServiceAccountKey::from_json(credentials.expose_secret())
            .and_then(|key| ServiceAccountAuth::new(client.clone(), key));

        match auth {
            Ok(auth) => {
                tracing::info!(client_email = auth.client_email(), "speech synthesis enabled");
                Self::Enabled(Arc::new(GoogleTtsClient::new(client, base_url, auth)))
            }
            Err(e) => {
                tracing::warn!("error initializing speech synthesis: {e}; audio disabled");
                Self::Disabled
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// `Ok(None)` when disabled; synthesis failures only surface when enabled.
    pub async fn synthesize(&self, text: &str, lang: &str) -> Result<Option<Vec<u8>>, SpeechError> {
        match self {
            Self::Enabled(synth) => synth.synthesize(text, lang).await.map(Some),
            Self::Disabled => Ok(None),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: String,
}

/// Google Cloud Text-to-Speech adapter.
pub struct GoogleTtsClient {
    client: Client,
    base_url: String,
    auth: ServiceAccountAuth,
}

impl GoogleTtsClient {
    pub fn new(client: Client, base_url: &str, auth: ServiceAccountAuth) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsClient {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, SpeechError> {
        let profile = language::resolve(lang);
        let token = self.auth.access_token().await?;

        let body = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: profile.voice_locale(),
                name: profile.voice,
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
            },
        };

        tracing::debug!(voice = profile.voice, text_len = text.len(), "synthesizing speech");

        let response = self
            .client
            .post(format!("{}/v1/text:synthesize", self.base_url))
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(SpeechError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        let audio = STANDARD
            .decode(parsed.audio_content.as_bytes())
            .map_err(|e| SpeechError::InvalidResponse(format!("audioContent is not base64: {e}")))?;
        if audio.is_empty() {
            return Err(SpeechError::InvalidResponse("empty audioContent".to_string()));
        }

        tracing::debug!(bytes = audio.len(), "speech synthesis complete");
        Ok(audio)
    }
}
