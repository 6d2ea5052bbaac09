use std::env;

use auth::AuthSettings;
use auth::HashScheme;
use auth::HashingParams;
use auth::SettingsError;
use auth::SigningAlgorithm;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub hashing: HashingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: String,
    pub access_token_ttl_minutes: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl_minutes", &self.access_token_ttl_minutes)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HashingConfig {
    pub scheme: String,
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }

    /// Convert the raw jwt and hashing sections into validated auth settings.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Algorithm is not an HMAC variant
    /// * `UnsupportedHashScheme` - Scheme is not an Argon2 variant
    /// * `EmptySecret` / `NonPositiveTtl` - Values out of range
    pub fn auth_settings(&self) -> Result<AuthSettings, SettingsError> {
        let algorithm: SigningAlgorithm = self.jwt.algorithm.parse()?;
        let scheme: HashScheme = self
            .hashing
            .scheme
            .parse()
            .map_err(|_| SettingsError::UnsupportedHashScheme(self.hashing.scheme.clone()))?;

        let settings = AuthSettings {
            secret: self.jwt.secret.as_bytes().to_vec(),
            algorithm,
            access_token_ttl: chrono::Duration::minutes(self.jwt.access_token_ttl_minutes),
            hashing: HashingParams {
                scheme,
                memory_kib: self.hashing.memory_kib,
                iterations: self.hashing.iterations,
                parallelism: self.hashing.parallelism,
            },
        };
        settings.validate()?;

        Ok(settings)
    }
}
