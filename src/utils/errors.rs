use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Library error: {0}")]
    Library(String),

    #[error("Media not found: {0}")]
    MediaNotFound(String),

    #[error("Library is not available: {0}")]
    LibraryUnavailable(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Event bus error: {0}")]
    EventBus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
