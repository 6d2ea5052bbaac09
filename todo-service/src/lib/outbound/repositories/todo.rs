use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoDraft;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoTitle;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::UserId;

const TODO_COLUMNS: &str =
    "id, title, description, priority, completed, user_id, created_at, updated_at";

/// PostgreSQL todo store. Every statement filters on `user_id`.
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    description: String,
    priority: i32,
    completed: bool,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = TodoError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        Ok(Todo {
            id: TodoId(row.id),
            owner: UserId(row.user_id),
            title: TodoTitle::new(row.title)?,
            description: row.description,
            priority: row.priority,
            completed: row.completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> TodoError {
    TodoError::DatabaseError(e.to_string())
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, owner: &UserId, draft: TodoDraft) -> Result<Todo, TodoError> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            r#"
            INSERT INTO todos (title, description, priority, completed, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TODO_COLUMNS}
            "#
        ))
        .bind(draft.title.as_str())
        .bind(&draft.description)
        .bind(draft.priority)
        .bind(draft.completed)
        .bind(owner.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        row.try_into()
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE user_id = $1 ORDER BY id"
        ))
        .bind(owner.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Todo::try_from).collect()
    }

    async fn find_owned(&self, owner: &UserId, id: &TodoId) -> Result<Option<Todo>, TodoError> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE id = $1 AND user_id = $2"
        ))
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Todo::try_from).transpose()
    }

    async fn update_owned(
        &self,
        owner: &UserId,
        id: &TodoId,
        draft: TodoDraft,
    ) -> Result<Option<Todo>, TodoError> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            r#"
            UPDATE todos
            SET title = $3, description = $4, priority = $5, completed = $6, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {TODO_COLUMNS}
            "#
        ))
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .bind(draft.title.as_str())
        .bind(&draft.description)
        .bind(draft.priority)
        .bind(draft.completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Todo::try_from).transpose()
    }

    async fn delete_owned(&self, owner: &UserId, id: &TodoId) -> Result<Option<Todo>, TodoError> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "DELETE FROM todos WHERE id = $1 AND user_id = $2 RETURNING {TODO_COLUMNS}"
        ))
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Todo::try_from).transpose()
    }
}
