use thiserror::Error;

/// pokesearch 統一エラー型
#[derive(Debug, Error)]
pub enum DexError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Source API error: {message} (status: {status})")]
    SourceApi { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DexError>;
