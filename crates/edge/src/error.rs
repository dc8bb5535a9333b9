use domain::setting::InvalidFallbackMode;
use serve::Error as ServeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error(transparent)]
    FallbackMode(#[from] InvalidFallbackMode),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("no CMS page with id {0}")]
    PageNotFound(u64),

    #[error("serve error: {0}")]
    Serve(#[from] ServeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
