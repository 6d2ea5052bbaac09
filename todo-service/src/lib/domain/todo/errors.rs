use thiserror::Error;

use crate::domain::todo::models::TodoId;

/// Error for TodoId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoIdError {
    #[error("Invalid todo id: {0}. It must be a positive integer.")]
    NotPositive(i64),
}

/// Error for TodoTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoTitleError {
    #[error("Todo title is empty")]
    Empty,

    #[error("Todo title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all todo-related operations
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    #[error("Invalid todo ID: {0}")]
    InvalidTodoId(#[from] TodoIdError),

    #[error("Invalid todo title: {0}")]
    InvalidTitle(#[from] TodoTitleError),

    /// Also returned when the todo exists but belongs to someone else.
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
