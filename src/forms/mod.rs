//! Form definitions backing the admin listing routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod listing;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("created_from is after created_to")]
    InvalidDateRange,

    #[error("invalid active filter: {0}")]
    InvalidActiveFilter(String),

    #[error("invalid flag value: {0}")]
    InvalidFlag(String),
}
