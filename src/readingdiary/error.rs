use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiaryError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Not a number: {0:?}")]
    InvalidNumber(String),

    #[error("Invalid date {input:?}, expected format {format}")]
    InvalidDate { input: String, format: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DiaryError>;
