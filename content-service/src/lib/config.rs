use std::env;

use auth::HashScheme;
use auth::PasswordError;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    /// `bcrypt` or `argon2`; applies to newly computed hashes only
    pub scheme: String,
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub fn hash_scheme(&self) -> Result<HashScheme, PasswordError> {
        HashScheme::from_name(&self.scheme, self.bcrypt_cost)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub seed_sample_data: bool,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SERVER__HTTP_PORT, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 12345)?
            .set_default("jwt.expiration_hours", 24)?
            .set_default("password.scheme", "bcrypt")?
            .set_default("password.bcrypt_cost", 10)?
            .set_default("store.seed_sample_data", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;

        configuration.try_deserialize()
    }
}
