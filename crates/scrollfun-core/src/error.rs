use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown easing: {0}")]
    UnknownEasing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
