// src/services/knowledge.rs
use std::path::{Path, PathBuf};

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse the local recommendations document.
pub async fn load(path: &Path) -> Result<Value, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`load`], but any failure yields an empty object so the service
/// keeps running without local knowledge.
pub async fn load_or_empty(path: &Path) -> Value {
    match load(path).await {
        Ok(doc) => {
            tracing::info!(path = %path.display(), "loaded recommendations");
            doc
        }
        Err(e) => {
            tracing::warn!("{e}; continuing without local recommendations");
            empty()
        }
    }
}

pub fn empty() -> Value {
    Value::Object(Default::default())
}
