pub mod create_todo;
pub mod delete_todo;
pub mod get_todo;
pub mod list_todos;
pub mod update_todo;

use auth::Identity;
use chrono::DateTime;
use chrono::Utc;
pub use create_todo::create_todo;
pub use delete_todo::delete_todo;
pub use get_todo::get_todo;
pub use list_todos::list_todos;
use serde::Deserialize;
use serde::Serialize;
pub use update_todo::update_todo;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoDraft;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoTitle;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;

/// HTTP request body for creating or fully updating a todo (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct TodoRequest {
    title: String,
    description: String,
    priority: i32,
    #[serde(default)]
    completed: bool,
}

impl TodoRequest {
    fn try_into_draft(self) -> Result<TodoDraft, TodoError> {
        Ok(TodoDraft {
            title: TodoTitle::new(self.title)?,
            description: self.description,
            priority: self.priority,
            completed: self.completed,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoResponseData {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub completed: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Todo> for TodoResponseData {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.as_i64(),
            title: todo.title.as_str().to_string(),
            description: todo.description.clone(),
            priority: todo.priority,
            completed: todo.completed,
            user_id: todo.owner.as_i64(),
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

fn parse_todo_id(raw: &str) -> Result<TodoId, ApiError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid todo ID: {}", raw)))?;
    TodoId::from_raw(id).map_err(|e| ApiError::from(TodoError::from(e)))
}

/// The gate has already verified the token; its id claim names the owner.
fn owner_of(identity: &Identity) -> UserId {
    UserId(identity.user_id)
}
