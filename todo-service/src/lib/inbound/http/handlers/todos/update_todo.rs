use auth::Identity;
use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::owner_of;
use super::parse_todo_id;
use super::TodoRequest;
use super::TodoResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_todo(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(todo_id): Path<String>,
    body: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<ApiSuccess<TodoResponseData>, ApiError> {
    let todo_id = parse_todo_id(&todo_id)?;
    let Json(body) = body?;
    let draft = body.try_into_draft()?;

    state
        .todo_service
        .update_todo(&owner_of(&identity), &todo_id, draft)
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::OK, todo.into()))
}
