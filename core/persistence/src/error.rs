//! FILENAME: core/persistence/src/error.rs

use records::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid stored data: {0}")]
    InvalidFormat(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("{collection} record not found: {id}")]
    NotFound { collection: &'static str, id: String },

    #[error("{collection} id already in use: {id}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<FieldError>),
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl PersistenceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::NotFound { .. })
    }
}
