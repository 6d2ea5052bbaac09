use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::IssuedToken;

use super::errors::AuthError;
use super::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Login flow: credential lookup, password verification, token issuance.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    user_repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(user_repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            user_repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        // A username that could never have been stored cannot match.
        let Ok(username) = Username::new(username.to_string()) else {
            return Err(AuthError::InvalidCredentials);
        };

        let user = self
            .user_repository
            .find_by_username(&username)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Credential lookup failed");
                AuthError::StorageFailure(e.to_string())
            })?;

        self.authenticator
            .verify_credentials(password, user.as_ref().map(|u| u.password_hash.as_str()))
            .map_err(|_| AuthError::InvalidCredentials)?;

        user.ok_or(AuthError::InvalidCredentials)
    }

    async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let user = self.authenticate(username, password).await?;

        let token = self
            .authenticator
            .issue_token(user.username.as_str(), user.id.as_i64(), user.role.as_str())
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            expires_at = %token.expires_at,
            "User logged in"
        );

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use auth::AuthSettings;
    use auth::HashScheme;
    use auth::HashingParams;
    use auth::SigningAlgorithm;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::NewUser;
    use crate::domain::user::models::Role;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(
            Authenticator::new(&AuthSettings {
                secret: b"test_secret_key_at_least_32_bytes!".to_vec(),
                algorithm: SigningAlgorithm::HS256,
                access_token_ttl: chrono::Duration::minutes(30),
                hashing: HashingParams {
                    scheme: HashScheme::Argon2id,
                    memory_kib: 1024,
                    iterations: 1,
                    parallelism: 1,
                },
            })
            .unwrap(),
        )
    }

    fn alice(authenticator: &Authenticator) -> User {
        User {
            id: UserId(1),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            password_hash: authenticator.hash_password("pw1").unwrap(),
            role: Role::new("user".to_string()).unwrap(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn repository_with(user: Option<User>) -> MockTestUserRepository {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |username| {
                Ok(user
                    .clone()
                    .filter(|u| u.username.as_str() == username.as_str()))
            });
        repository
    }

    #[tokio::test]
    async fn test_login_issues_token_for_valid_credentials() {
        let authenticator = authenticator();
        let repository = repository_with(Some(alice(&authenticator)));
        let service = AuthService::new(Arc::new(repository), Arc::clone(&authenticator));

        let token = service.login("alice", "pw1").await.unwrap();
        assert_eq!(token.token_type, "bearer");
        assert!(token.expires_at > Utc::now());

        let identity = authenticator.authorize(&token.access_token).unwrap();
        assert_eq!(identity.subject, "alice");
        assert_eq!(identity.user_id, 1);
        assert_eq!(identity.role, "user");
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let authenticator = authenticator();
        let repository = repository_with(Some(alice(&authenticator)));
        let service = AuthService::new(Arc::new(repository), authenticator);

        let result = service.authenticate("alice", "PW1").await;
        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_wrong_case_username_is_invalid_credentials() {
        let authenticator = authenticator();
        let repository = repository_with(Some(alice(&authenticator)));
        let service = AuthService::new(Arc::new(repository), authenticator);

        let result = service.authenticate("Alice", "pw1").await;
        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_user_matches_wrong_password() {
        let authenticator = authenticator();

        let unknown = AuthService::new(Arc::new(repository_with(None)), authenticator.clone())
            .authenticate("ghost", "pw1")
            .await
            .unwrap_err();
        let wrong = AuthService::new(
            Arc::new(repository_with(Some(alice(&authenticator)))),
            authenticator,
        )
        .authenticate("alice", "nope")
        .await
        .unwrap_err();

        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn test_malformed_username_skips_lookup() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_username().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.authenticate("a b", "pw1").await;
        assert!(matches!(result.unwrap_err(), AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_bad_credentials() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("connection reset".to_string())));

        let service = AuthService::new(Arc::new(repository), authenticator());

        let result = service.login("alice", "pw1").await;
        assert!(matches!(result.unwrap_err(), AuthError::StorageFailure(_)));
    }
}
