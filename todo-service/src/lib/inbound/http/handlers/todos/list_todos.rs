use auth::Identity;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::owner_of;
use super::TodoResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_todos(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<Vec<TodoResponseData>>, ApiError> {
    state
        .todo_service
        .list_todos(&owner_of(&identity))
        .await
        .map_err(ApiError::from)
        .map(|todos| {
            ApiSuccess::new(
                StatusCode::OK,
                todos.iter().map(TodoResponseData::from).collect(),
            )
        })
}
