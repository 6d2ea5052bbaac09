use auth::Identity;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::owner_of;
use super::parse_todo_id;
use super::TodoResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(todo_id): Path<String>,
) -> Result<ApiSuccess<TodoResponseData>, ApiError> {
    let todo_id = parse_todo_id(&todo_id)?;

    state
        .todo_service
        .delete_todo(&owner_of(&identity), &todo_id)
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::OK, todo.into()))
}
