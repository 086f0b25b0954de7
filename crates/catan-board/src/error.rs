//! Errors raised while loading game state or render configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid edge direction {0} (expected 0-5)")]
    InvalidDirection(u8),

    #[error("Invalid game state JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid render config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write SVG")]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
