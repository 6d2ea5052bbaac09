use std::sync::Arc;

use async_trait::async_trait;

use super::errors::TodoError;
use super::models::Todo;
use super::models::TodoDraft;
use super::models::TodoId;
use super::ports::TodoRepository;
use super::ports::TodoServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of TodoServicePort.
///
/// Generic over repository for testability.
pub struct TodoService<TR>
where
    TR: TodoRepository,
{
    todo_repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository,
{
    pub fn new(todo_repository: Arc<TR>) -> Self {
        Self { todo_repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository,
{
    async fn create_todo(&self, owner: &UserId, draft: TodoDraft) -> Result<Todo, TodoError> {
        let todo = self.todo_repository.create(owner, draft).await?;

        tracing::info!(todo_id = %todo.id, user_id = %owner, "Todo created");

        Ok(todo)
    }

    async fn list_todos(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError> {
        self.todo_repository.list_by_owner(owner).await
    }

    async fn get_todo(&self, owner: &UserId, id: &TodoId) -> Result<Todo, TodoError> {
        self.todo_repository
            .find_owned(owner, id)
            .await?
            .ok_or(TodoError::NotFound(*id))
    }

    async fn update_todo(
        &self,
        owner: &UserId,
        id: &TodoId,
        draft: TodoDraft,
    ) -> Result<Todo, TodoError> {
        let todo = self
            .todo_repository
            .update_owned(owner, id, draft)
            .await?
            .ok_or(TodoError::NotFound(*id))?;

        tracing::info!(todo_id = %id, user_id = %owner, "Todo updated");

        Ok(todo)
    }

    async fn delete_todo(&self, owner: &UserId, id: &TodoId) -> Result<Todo, TodoError> {
        let todo = self
            .todo_repository
            .delete_owned(owner, id)
            .await?
            .ok_or(TodoError::NotFound(*id))?;

        tracing::info!(todo_id = %id, user_id = %owner, "Todo deleted");

        Ok(todo)
    }
}
