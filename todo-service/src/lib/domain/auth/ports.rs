use async_trait::async_trait;
use auth::IssuedToken;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::models::User;

/// Port for credential verification and session issuance.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Look up `username` exactly once and verify `password` against it.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown or malformed username, or wrong password
    /// * `StorageFailure` - Credential store could not be read
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError>;

    /// Authenticate and issue a bearer token for the verified user.
    async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError>;
}
