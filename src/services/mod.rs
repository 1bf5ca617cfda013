//! Services coordinating the admin listing workflows.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod listing;
pub mod service_categories;
pub mod specializations;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Entity not found")]
    NotFound,

    #[error("Form error: {0}")]
    Form(String),

    #[error("Type constraint error: {0}")]
    TypeConstraint(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
