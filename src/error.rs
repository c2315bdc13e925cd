//! Errors raised at the crate's I/O and configuration edges.
//!
//! Scoring itself never fails; only loading pages and configs can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiReadyError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid page json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AiReadyError>;
