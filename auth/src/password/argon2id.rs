use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// PHC string prefix shared by every Argon2 variant.
pub const PREFIX: &str = "$argon2";

/// Hash a plaintext password with Argon2id and a random salt.
///
/// # Returns
/// PHC string format hash (includes algorithm, parameters, salt, and hash)
pub fn hash(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))
}

/// Verify a password against an Argon2 PHC string.
///
/// A mismatch is `Ok(false)`; only a structurally broken hash is an error.
pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Invalid argon2 hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash("my_secure_password").expect("Failed to hash password");

        assert!(hash.starts_with(PREFIX));
        assert!(verify("my_secure_password", &hash).expect("Failed to verify password"));
        assert!(!verify("wrong_password", &hash).expect("Failed to verify password"));
    }

    #[test]
    fn test_verify_invalid_hash() {
        let result = verify("password", "$argon2id$garbage");
        assert!(matches!(result, Err(PasswordError::InvalidHash(_))));
    }
}
