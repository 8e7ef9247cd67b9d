use std::io;

use thiserror::Error;
use wxmd_config::ConfigError;

/// Top-level error type for the wxmd crate.
#[derive(Debug, Error)]
pub enum WxmdError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("Thread pool error: {0}")]
  ThreadPool(#[from] rayon::ThreadPoolBuildError),

  #[error("Input error: {0}")]
  Input(String),

  #[error("Failed to render {path}: {message}")]
  Render { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, WxmdError>;
