use std::fmt;
use std::str::FromStr;

use super::argon2id;
use super::bcrypt_scheme;
use super::errors::PasswordError;

/// Algorithm used for newly computed hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    /// bcrypt with the given work factor (`$2b$` modular crypt strings).
    Bcrypt { cost: u32 },
    /// Argon2id with library defaults (PHC strings).
    Argon2id,
}

impl HashScheme {
    /// Resolve a configured scheme name.
    ///
    /// # Arguments
    /// * `name` - `bcrypt` or `argon2` (case-insensitive)
    /// * `bcrypt_cost` - Work factor applied when the scheme is bcrypt
    ///
    /// # Errors
    /// * `UnknownScheme` - Name matches neither scheme
    pub fn from_name(name: &str, bcrypt_cost: u32) -> Result<Self, PasswordError> {
        match name.parse::<HashSchemeName>()? {
            HashSchemeName::Bcrypt => Ok(Self::Bcrypt { cost: bcrypt_cost }),
            HashSchemeName::Argon2 => Ok(Self::Argon2id),
        }
    }
}

impl Default for HashScheme {
    fn default() -> Self {
        Self::Bcrypt {
            cost: bcrypt_scheme::DEFAULT_COST,
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bcrypt { cost } => write!(f, "bcrypt(cost={})", cost),
            Self::Argon2id => f.write_str("argon2id"),
        }
    }
}

enum HashSchemeName {
    Bcrypt,
    Argon2,
}

impl FromStr for HashSchemeName {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(Self::Bcrypt),
            "argon2" | "argon2id" => Ok(Self::Argon2),
            other => Err(PasswordError::UnknownScheme(other.to_string())),
        }
    }
}

/// Password hashing implementation.
///
/// Hashes with the configured scheme and verifies against whichever scheme
/// produced the stored hash, so bcrypt and Argon2id hashes can coexist.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    scheme: HashScheme,
}

impl PasswordHasher {
    /// Create a new password hasher using bcrypt with the default cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a password hasher for an explicit scheme.
    pub fn with_scheme(scheme: HashScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Empty input is hashed like any other; rejecting it is the caller's job.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying algorithm failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        match self.scheme {
            HashScheme::Bcrypt { cost } => bcrypt_scheme::hash(password, cost),
            HashScheme::Argon2id => argon2id::hash(password),
        }
    }

    /// Verify a password against a stored hash.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `InvalidHash` - Stored hash is not a recognizable bcrypt or Argon2 string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        if bcrypt_scheme::is_bcrypt(hash) {
            bcrypt_scheme::verify(password, hash)
        } else if hash.starts_with(argon2id::PREFIX) {
            argon2id::verify(password, hash)
        } else {
            Err(PasswordError::InvalidHash(
                "Unrecognized password hash format".to_string(),
            ))
        }
    }
}
