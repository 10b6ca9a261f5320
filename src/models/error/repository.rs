use thiserror::Error;

use crate::models::ApiError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Failed to acquire lock: {0}")]
    LockError(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(msg) => ApiError::NotFound(msg),
            RepositoryError::ConstraintViolation(msg) | RepositoryError::InvalidData(msg) => {
                ApiError::BadRequest(msg)
            }
            RepositoryError::LockError(msg) | RepositoryError::Unknown(msg) => {
                ApiError::InternalError(msg)
            }
        }
    }
}
