// src/config.rs
use std::{env, path::PathBuf, time::Duration};

use secrecy::SecretString;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_TTS_BASE_URL: &str = "https://texttospeech.googleapis.com";
pub const RECOMMENDATIONS_FILE: &str = "recommendations.json";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<SecretString>,
    pub google_credentials_json: Option<SecretString>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub tts_base_url: String,
    pub recommendations_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = var("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8000);

        let http_timeout = var("HTTP_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(60));

        Self {
            openai_api_key: var("OPENAI_API_KEY").map(SecretString::from),
            google_credentials_json: var("GOOGLE_APPLICATION_CREDENTIALS_JSON")
                .map(SecretString::from),
            openai_base_url: var("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            openai_model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            tts_base_url: var("TTS_BASE_URL").unwrap_or_else(|| DEFAULT_TTS_BASE_URL.to_string()),
            recommendations_path: var("RECOMMENDATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_recommendations_path),
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            http_timeout,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `recommendations.json` next to the running executable.
fn default_recommendations_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(RECOMMENDATIONS_FILE)))
        .unwrap_or_else(|| PathBuf::from(RECOMMENDATIONS_FILE))
}
