//! Error types for the lumberjack crate
//!
//! Felling itself never fails; these cover loading configuration and scenes.

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Scene error: {0}")]
    Scene(String),
}
