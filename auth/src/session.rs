use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Serialize;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Bearer token handed back to a client after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_at: DateTime<Utc>,
}

/// Turns a verified identity into a signed, time-bound access token.
///
/// The lifetime is fixed at construction; callers cannot choose it.
#[derive(Clone)]
pub struct SessionIssuer {
    codec: Arc<JwtHandler>,
    ttl: Duration,
}

impl SessionIssuer {
    pub fn new(codec: Arc<JwtHandler>, ttl: Duration) -> Self {
        Self { codec, ttl }
    }

    /// Issue a token for the given identity, expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, username: &str, user_id: i64, role: &str) -> Result<IssuedToken, JwtError> {
        self.issue_at(username, user_id, role, Utc::now())
    }

    fn issue_at(
        &self,
        username: &str,
        user_id: i64,
        role: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let claims = Claims::for_user(username, user_id, role, now, self.ttl);
        let access_token = self.codec.encode(&claims)?;

        Ok(IssuedToken {
            access_token,
            token_type: "bearer",
            expires_at: claims.expires_at().unwrap_or(now + self.ttl),
        })
    }
}
