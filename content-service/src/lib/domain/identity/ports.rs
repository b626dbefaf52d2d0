use crate::author::models::AuthorId;
use crate::identity::errors::AuthenticationError;
use crate::identity::models::Identity;

/// Verifies bearer tokens against the process-wide signing secret.
///
/// Stateless beyond the secret, so implementations are shared across
/// requests without locking.
pub trait TokenValidator: Send + Sync + 'static {
    /// Verify a token and decode the caller's identity.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed structure or missing `id` claim
    /// * `InvalidSignature` - Signature mismatch or unexpected algorithm
    /// * `TokenExpired` - `exp` claim is present and in the past
    fn validate(&self, token: &str) -> Result<Identity, AuthenticationError>;
}

/// Mints bearer tokens for authenticated authors.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Issue a signed token whose `id` claim is the author's id.
    ///
    /// # Errors
    /// * `IssuanceFailed` - Token encoding failed
    fn issue(&self, author_id: &AuthorId) -> Result<String, AuthenticationError>;
}
