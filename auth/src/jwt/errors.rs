use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Structure, encoding, or claim payload is unusable.
    #[error("Token is malformed: {0}")]
    Malformed(String),

    /// Signature mismatch or a signing algorithm other than the expected one.
    #[error("Token signature is invalid: {0}")]
    InvalidSignature(String),

    #[error("Token is expired")]
    TokenExpired,
}
