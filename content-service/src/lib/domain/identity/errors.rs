use thiserror::Error;

/// Failures while establishing who the caller is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("authorization header required")]
    MissingHeader,

    #[error("authorization header must have the form 'Bearer <token>'")]
    MalformedHeader,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("invalid token signature: {0}")]
    InvalidSignature(String),

    #[error("token is expired")]
    TokenExpired,

    #[error("token issuance failed: {0}")]
    IssuanceFailed(String),
}
