// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid note: {0}")]
    InvalidNote(String),
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
    #[error("Invalid solver profile: {0}")]
    InvalidProfile(String),
    #[error("Storage error: {0}")]
    StorageError(String),
}
