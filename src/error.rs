//! Unified error type for hookctl.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("manifest not found at {0}")]
    ManifestNotFound(PathBuf),

    #[error("invalid manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("hook task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, HookError>;
