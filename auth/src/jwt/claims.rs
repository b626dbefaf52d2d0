use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an author's bearer token.
///
/// `id` is the only claim the service relies on. `exp` is honoured when
/// present, so tokens without one never expire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Author identifier
    pub id: String,

    /// Subject (mirrors `id` on issued tokens)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create bare claims holding only the `id` claim.
    pub fn new(id: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            sub: None,
            exp: None,
            iat: None,
        }
    }

    /// Create claims for an author with automatic expiration.
    ///
    /// # Arguments
    /// * `author_id` - Author identifier
    /// * `expiration_hours` - Hours until token expires
    ///
    /// # Returns
    /// Claims with id, sub, exp, and iat set
    pub fn for_author(author_id: impl ToString, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);
        let id = author_id.to_string();

        Self {
            sub: Some(id.clone()),
            id,
            exp: Some(expiration.timestamp()),
            iat: Some(now.timestamp()),
        }
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("author-1");
        assert_eq!(claims.id, "author-1");
        assert!(claims.sub.is_none());
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_for_author() {
        let claims = Claims::for_author("author-1", 24);

        assert_eq!(claims.id, "author-1");
        assert_eq!(claims.sub, Some("author-1".to_string()));

        let exp = claims.exp.unwrap();
        let iat = claims.iat.unwrap();
        assert_eq!(exp - iat, 24 * 60 * 60);
    }

    #[test]
    fn test_optional_claims_are_omitted() {
        let json = serde_json::to_value(Claims::new("author-1")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "author-1" }));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::new("author-1").with_expiration(1000);

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_is_expired_no_exp_claim() {
        let claims = Claims::new("author-1").with_issued_at(0);
        assert!(!claims.is_expired(9999999999));
    }
}
