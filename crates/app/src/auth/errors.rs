//! Auth service errors.

use thiserror::Error;

use crate::{auth::validate::FieldError, storage::StorageError};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// One or more form fields failed validation.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("account not found; try signing up")]
    AccountNotFound,

    #[error("incorrect password")]
    IncorrectPassword,

    #[error("this email already exists; try logging in")]
    EmailTaken,

    #[error("storage error")]
    Storage(#[from] StorageError),
}
