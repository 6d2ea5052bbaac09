use thiserror::Error;

/// Outcome of a failed login.
///
/// Unknown usernames and wrong passwords share `InvalidCredentials` so the
/// response does not reveal which accounts exist.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Credential store unavailable: {0}")]
    StorageFailure(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),
}
