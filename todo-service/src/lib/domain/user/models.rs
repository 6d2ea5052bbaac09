use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::RoleError;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::errors::UsernameError;

/// User aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: Role,
    /// Stored but not enforced by login or the access gate.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User unique identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Validate a caller-supplied identifier.
    ///
    /// # Errors
    /// * `NotPositive` - Identifier is zero or negative
    pub fn from_raw(id: i64) -> Result<Self, UserIdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(UserIdError::NotPositive(id))
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures username is 3-32 characters and contains only alphanumeric, underscore, and hyphen.
/// Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 32 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Width of the `users.email` column.
    const MAX_LENGTH: usize = 255;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `TooLong` - Email longer than 255 characters
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let length = email.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form role label carried into access tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role(String);

impl Role {
    const MAX_LENGTH: usize = 64;

    /// # Errors
    /// * `Empty` - Role is blank
    /// * `TooLong` - Role longer than 64 characters
    pub fn new(role: String) -> Result<Self, RoleError> {
        let role = role.trim().to_string();
        let length = role.chars().count();
        if length == 0 {
            Err(RoleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(RoleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(role))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Profile fields shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub username: Username,
    pub email: EmailAddress,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub profile: UserProfile,
    pub password: String,
}

impl CreateUserCommand {
    /// Construct a new create user command.
    ///
    /// The password is plaintext and is hashed by the service.
    pub fn new(profile: UserProfile, password: String) -> Self {
        Self { profile, password }
    }
}

/// Command to overwrite every mutable field of an existing user.
#[derive(Debug)]
pub struct UpdateUserCommand {
    pub profile: UserProfile,
    pub password: String,
}

/// Row to insert; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub profile: UserProfile,
    pub password_hash: String,
}
