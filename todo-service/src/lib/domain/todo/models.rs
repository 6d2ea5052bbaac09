use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::todo::errors::TodoIdError;
use crate::domain::todo::errors::TodoTitleError;
use crate::domain::user::models::UserId;

/// Todo unique identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(pub i64);

impl TodoId {
    /// Validate a caller-supplied identifier.
    ///
    /// # Errors
    /// * `NotPositive` - Identifier is zero or negative
    pub fn from_raw(id: i64) -> Result<Self, TodoIdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(TodoIdError::NotPositive(id))
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Todo title value object.
///
/// Must be non-empty after trimming and at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    const MAX_LENGTH: usize = 200;

    /// # Errors
    /// * `Empty` - Title is blank
    /// * `TooLong` - Title exceeds 200 characters
    pub fn new(title: String) -> Result<Self, TodoTitleError> {
        let trimmed = title.trim();

        if trimmed.is_empty() {
            return Err(TodoTitleError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TodoTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Todo item owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: TodoId,
    pub owner: UserId,
    pub title: TodoTitle,
    pub description: String,
    pub priority: i32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-controlled fields of a todo, used for both create and full update.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    pub title: TodoTitle,
    pub description: String,
    pub priority: i32,
    pub completed: bool,
}
