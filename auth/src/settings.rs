use chrono::Duration;
use thiserror::Error;

use crate::jwt::handler::SigningAlgorithm;
use crate::password::HashingParams;

/// Error type for invalid authentication settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Unsupported hashing scheme: {0}")]
    UnsupportedHashScheme(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidHashParams(String),

    #[error("Access token lifetime must be positive")]
    NonPositiveTtl,
}

/// Process-wide authentication settings.
///
/// Built once at startup and handed to [`crate::Authenticator::new`];
/// immutable afterwards.
#[derive(Clone)]
pub struct AuthSettings {
    pub secret: Vec<u8>,
    pub algorithm: SigningAlgorithm,
    pub access_token_ttl: Duration,
    pub hashing: HashingParams,
}

impl AuthSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.secret.is_empty() {
            return Err(SettingsError::EmptySecret);
        }
        if self.access_token_ttl <= Duration::zero() {
            return Err(SettingsError::NonPositiveTtl);
        }
        Ok(())
    }
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("hashing", &self.hashing)
            .finish()
    }
}
