use super::errors::PasswordError;

/// Modular crypt prefixes produced by bcrypt implementations.
pub const PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Cost used when none is configured.
pub const DEFAULT_COST: u32 = 10;

pub fn hash(password: &str, cost: u32) -> Result<String, PasswordError> {
    bcrypt::hash(password, cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
}

/// Verify a password against a bcrypt hash.
///
/// `bcrypt::verify` compares digests in constant time. Any error it reports
/// comes from parsing the stored hash.
pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(password, hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Invalid bcrypt hash: {}", e)))
}

pub fn is_bcrypt(hash: &str) -> bool {
    PREFIXES.iter().any(|prefix| hash.starts_with(prefix))
}
