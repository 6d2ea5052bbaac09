use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoDraft;
use crate::domain::todo::models::TodoId;
use crate::domain::user::models::UserId;

/// Port for todo domain service operations.
///
/// Every operation is scoped to `owner`; a todo belonging to another user
/// is reported as `NotFound`.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a todo owned by `owner`.
    async fn create_todo(&self, owner: &UserId, draft: TodoDraft) -> Result<Todo, TodoError>;

    /// List the owner's todos, oldest first.
    async fn list_todos(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError>;

    /// # Errors
    /// * `NotFound` - Todo does not exist or is owned by someone else
    async fn get_todo(&self, owner: &UserId, id: &TodoId) -> Result<Todo, TodoError>;

    /// Overwrite title, description, priority and completed.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist or is owned by someone else
    async fn update_todo(
        &self,
        owner: &UserId,
        id: &TodoId,
        draft: TodoDraft,
    ) -> Result<Todo, TodoError>;

    /// Delete a todo and return the removed record.
    ///
    /// # Errors
    /// * `NotFound` - Todo does not exist or is owned by someone else
    async fn delete_todo(&self, owner: &UserId, id: &TodoId) -> Result<Todo, TodoError>;
}

/// Persistence operations for todos.
///
/// Ownership is part of every filter, so a foreign row is never read or
/// written.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, owner: &UserId, draft: TodoDraft) -> Result<Todo, TodoError>;

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError>;

    async fn find_owned(&self, owner: &UserId, id: &TodoId) -> Result<Option<Todo>, TodoError>;

    /// Returns `None` when no row matched both id and owner.
    async fn update_owned(
        &self,
        owner: &UserId,
        id: &TodoId,
        draft: TodoDraft,
    ) -> Result<Option<Todo>, TodoError>;

    /// Returns the deleted row, or `None` when no row matched both id and owner.
    async fn delete_owned(&self, owner: &UserId, id: &TodoId) -> Result<Option<Todo>, TodoError>;
}
