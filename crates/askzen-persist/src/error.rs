use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid import: {0}")]
    InvalidImport(String),

    #[error("Thread not found: {0}")]
    ThreadNotFound(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Invalid note: {0}")]
    InvalidNote(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, PersistError>;
