pub mod argon2id;
pub mod bcrypt_scheme;
pub mod errors;
pub mod hasher;

pub use errors::PasswordError;
pub use hasher::HashScheme;
pub use hasher::PasswordHasher;
