use std::sync::Arc;

use crate::gate::AccessGate;
use crate::gate::Identity;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::session::IssuedToken;
use crate::session::SessionIssuer;
use crate::settings::AuthSettings;
use crate::settings::SettingsError;

/// Authentication coordinator combining password verification, token
/// issuance and token validation.
///
/// Built once from [`AuthSettings`]; every component shares the same
/// signing key and algorithm.
#[derive(Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    issuer: SessionIssuer,
    gate: AccessGate,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Errors
    /// * `EmptySecret` / `NonPositiveTtl` - Settings failed validation
    /// * `InvalidHashParams` - Argon2 rejected the cost parameters
    pub fn new(settings: &AuthSettings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let password_hasher = PasswordHasher::with_params(settings.hashing)
            .map_err(|e| SettingsError::InvalidHashParams(e.to_string()))?;
        let codec = Arc::new(JwtHandler::with_algorithm(
            &settings.secret,
            settings.algorithm,
        ));

        Ok(Self {
            password_hasher,
            issuer: SessionIssuer::new(Arc::clone(&codec), settings.access_token_ttl),
            gate: AccessGate::new(codec),
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a login attempt against the stored hash, if any.
    ///
    /// An absent account and a wrong password produce the same error.
    pub fn verify_credentials(
        &self,
        password: &str,
        stored_hash: Option<&str>,
    ) -> Result<(), AuthenticationError> {
        match stored_hash {
            Some(hash) if self.password_hasher.verify(password, hash) => Ok(()),
            _ => Err(AuthenticationError::InvalidCredentials),
        }
    }

    /// Issue an access token for an already verified identity.
    pub fn issue_token(
        &self,
        username: &str,
        user_id: i64,
        role: &str,
    ) -> Result<IssuedToken, JwtError> {
        self.issuer.issue(username, user_id, role)
    }

    /// Validate an access token and return the caller identity.
    pub fn authorize(&self, token: &str) -> Result<Identity, JwtError> {
        self.gate.authorize(token)
    }
}
