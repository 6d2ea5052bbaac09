pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

pub use create_user::create_user;
use chrono::DateTime;
use chrono::Utc;
pub use delete_user::delete_user;
pub use get_user::get_user;
pub use list_users::list_users;
use serde::Deserialize;
use serde::Serialize;
pub use update_user::update_user;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;

/// HTTP request body shared by create and full update (raw JSON)
#[derive(Clone, Deserialize)]
pub struct UserRequest {
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    password: String,
    role: String,
}

impl UserRequest {
    /// Validate the profile fields; the plaintext password is returned
    /// alongside for the service to hash.
    fn try_into_parts(self) -> Result<(UserProfile, String), UserError> {
        let profile = UserProfile {
            username: Username::new(self.username)?,
            email: EmailAddress::new(self.email)?,
            first_name: self.first_name,
            last_name: self.last_name,
            role: Role::new(self.role)?,
        };
        Ok((profile, self.password))
    }
}

/// User representation returned to clients. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponseData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role.as_str().to_string(),
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid user ID: {}", raw)))?;
    UserId::from_raw(id).map_err(|e| ApiError::from(UserError::from(e)))
}
