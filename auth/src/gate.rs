use std::sync::Arc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Verified caller identity extracted from an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject: String,
    pub user_id: i64,
    pub role: String,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            user_id: claims.id,
            role: claims.role,
        }
    }
}

/// Precondition for every protected operation.
///
/// Stateless: a token is accepted or rejected solely on its own signature,
/// expiry and claim set at call time.
#[derive(Clone)]
pub struct AccessGate {
    codec: Arc<JwtHandler>,
}

impl AccessGate {
    pub fn new(codec: Arc<JwtHandler>) -> Self {
        Self { codec }
    }

    /// Validate a bearer token and return the caller identity.
    ///
    /// # Errors
    /// Any [`JwtError`] from decoding; all of them mean "unauthorized".
    pub fn authorize(&self, token: &str) -> Result<Identity, JwtError> {
        self.codec.decode::<Claims>(token).map(Identity::from)
    }
}
