use crate::author::models::AuthorId;
use crate::identity::errors::AuthenticationError;

/// Decoded claims of a verified bearer token.
///
/// Request-scoped; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub author_id: AuthorId,
}

impl Identity {
    pub fn new(author_id: AuthorId) -> Self {
        Self { author_id }
    }
}

/// Token extracted from an `Authorization` header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BearerToken<'a>(&'a str);

impl<'a> BearerToken<'a> {
    const SCHEME: &'static str = "Bearer";

    /// Parse a header value of the exact shape `Bearer <token>`.
    ///
    /// # Errors
    /// * `MalformedHeader` - Wrong scheme, missing token, or extra segments
    pub fn parse(header: &'a str) -> Result<Self, AuthenticationError> {
        let mut parts = header.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(Self::SCHEME), Some(token), None) if !token.is_empty() => Ok(Self(token)),
            _ => Err(AuthenticationError::MalformedHeader),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}
