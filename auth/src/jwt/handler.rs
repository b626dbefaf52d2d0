use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type. Signs and accepts HS256 (HMAC with SHA-256)
/// only; a token whose header names any other algorithm is rejected before
/// its signature is looked at.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Token structure or claim payload is invalid
    /// * `InvalidSignature` - Signature mismatch or unexpected algorithm
    /// * `TokenExpired` - Token has expired (if exp claim is present)
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        self.check_algorithm(token)?;

        let mut validation = Validation::new(self.algorithm);
        // exp is optional, but checked whenever it is present
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        let token_data = decode::<T>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidAlgorithmName => JwtError::InvalidSignature(e.to_string()),
                _ => JwtError::Malformed(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Compare the header's `alg` with the expected algorithm by name.
    ///
    /// Covers names `jsonwebtoken` cannot parse, `none` included.
    fn check_algorithm(&self, token: &str) -> Result<(), JwtError> {
        let segment = token
            .split('.')
            .next()
            .ok_or_else(|| JwtError::Malformed("missing header segment".to_string()))?;
        let bytes = URL_SAFE_NO_PAD
            .decode(segment)
            .map_err(|e| JwtError::Malformed(format!("header is not base64url: {}", e)))?;
        let header: RawHeader = serde_json::from_slice(&bytes)
            .map_err(|e| JwtError::Malformed(format!("header is not valid JSON: {}", e)))?;

        let expected = format!("{:?}", self.algorithm);
        if header.alg != expected {
            return Err(JwtError::InvalidSignature(format!(
                "unexpected algorithm {}, expected {}",
                header.alg, expected
            )));
        }

        Ok(())
    }
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}
