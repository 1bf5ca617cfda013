use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => {
                RepositoryError::StorageError(format!("I/O error: {err}"))
            }
            serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                RepositoryError::ValidationError(format!("Malformed snapshot: {err}"))
            }
            serde_json::error::Category::Data => {
                RepositoryError::ValidationError(format!("Invalid snapshot data: {err}"))
            }
        }
    }
}
