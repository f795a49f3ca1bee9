//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("browse of {uri} failed: {message}")]
    Browse { uri: String, message: String },
    #[error("tracklist error: {0}")]
    Tracklist(String),
    #[error("playback error: {0}")]
    Playback(String),
    #[error("failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to render config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("monitor is already running")]
    AlreadyRunning,
    #[error("failed to spawn thread: {0}")]
    Spawn(#[from] std::io::Error),
}

impl Error {
    pub fn browse(uri: Option<&str>, message: impl Into<String>) -> Self {
        Error::Browse {
            uri: uri.unwrap_or("<root>").to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
