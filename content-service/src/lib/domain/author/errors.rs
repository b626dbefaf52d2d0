use auth::PasswordError;
use thiserror::Error;

/// Top-level error for all author-related operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Author not found: {0}")]
    NotFound(String),

    // Login failures share a status but keep distinct messages
    #[error("invalid username")]
    InvalidUsername,

    #[error("invalid password")]
    InvalidPassword,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}
