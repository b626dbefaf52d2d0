use auth::Claims;
use auth::JwtError;
use auth::JwtHandler;

use crate::author::models::AuthorId;
use crate::identity::errors::AuthenticationError;
use crate::identity::models::Identity;
use crate::identity::ports::TokenIssuer;
use crate::identity::ports::TokenValidator;

/// HS256 bearer tokens signed with the process-wide secret.
///
/// Built once at startup; the secret is never rotated.
pub struct JwtTokenService {
    jwt_handler: JwtHandler,
    expiration_hours: i64,
}

impl JwtTokenService {
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            expiration_hours,
        }
    }
}

impl From<JwtError> for AuthenticationError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Malformed(msg) => AuthenticationError::InvalidToken(msg),
            JwtError::InvalidSignature(msg) => AuthenticationError::InvalidSignature(msg),
            JwtError::TokenExpired => AuthenticationError::TokenExpired,
            JwtError::EncodingFailed(msg) => AuthenticationError::IssuanceFailed(msg),
        }
    }
}

impl TokenValidator for JwtTokenService {
    fn validate(&self, token: &str) -> Result<Identity, AuthenticationError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.id.is_empty() {
            return Err(AuthenticationError::InvalidToken(
                "empty id claim".to_string(),
            ));
        }

        Ok(Identity::new(AuthorId::from_string(claims.id)))
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, author_id: &AuthorId) -> Result<String, AuthenticationError> {
        let claims = Claims::for_author(author_id, self.expiration_hours);
        Ok(self.jwt_handler.encode(&claims)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    #[test]
    fn test_issued_token_validates_to_same_author() {
        let tokens = JwtTokenService::new(SECRET, 24);
        let author_id = AuthorId::from_string("author-1");

        let token = tokens.issue(&author_id).unwrap();
        let identity = tokens.validate(&token).unwrap();

        assert_eq!(identity.author_id, author_id);
    }

    #[test]
    fn test_token_from_other_secret_is_signature_error() {
        let issuer = JwtTokenService::new(b"another-secret-key-for-jwt-signing-32b", 24);
        let validator = JwtTokenService::new(SECRET, 24);

        let token = issuer.issue(&AuthorId::from_string("author-1")).unwrap();

        assert!(matches!(
            validator.validate(&token),
            Err(AuthenticationError::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_unsigned_token_is_signature_error() {
        let tokens = JwtTokenService::new(SECRET, 24);
        // {"alg":"none","typ":"JWT"}.{"id":"author-1"}.
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJpZCI6ImF1dGhvci0xIn0.";

        assert!(matches!(
            tokens.validate(token),
            Err(AuthenticationError::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_expired_token() {
        let tokens = JwtTokenService::new(SECRET, 24);
        let claims = Claims::new("author-1").with_expiration(Utc::now().timestamp() - 3600);
        let token = JwtHandler::new(SECRET).encode(&claims).unwrap();

        assert_eq!(
            tokens.validate(&token),
            Err(AuthenticationError::TokenExpired)
        );
    }

    #[test]
    fn test_garbage_token() {
        let tokens = JwtTokenService::new(SECRET, 24);
        assert!(matches!(
            tokens.validate("garbage"),
            Err(AuthenticationError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_empty_id_claim() {
        let tokens = JwtTokenService::new(SECRET, 24);
        let token = JwtHandler::new(SECRET).encode(&Claims::new("")).unwrap();

        assert!(matches!(
            tokens.validate(&token),
            Err(AuthenticationError::InvalidToken(_))
        ));
    }
}
