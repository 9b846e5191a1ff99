//! Local Validation Errors
//!
//! Input rejected on the client before any network call is made.

use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Title must be at least {min} characters")]
    TitleTooShort { min: usize },
    #[error("Description must not exceed {max} characters")]
    DescriptionTooLong { max: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
}
