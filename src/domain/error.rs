use crate::domain::model::Provider;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FtError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{0} credentials are not configured")]
    NotConfigured(Provider),

    #[error("API Error: {0}")]
    Api(String),

    #[error("Hotkey error: {0}")]
    Hotkey(String),

    #[error("Time error: {0}")]
    Time(#[from] std::time::SystemTimeError),
}
