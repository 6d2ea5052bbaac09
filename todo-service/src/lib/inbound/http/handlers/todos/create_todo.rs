use auth::Identity;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::owner_of;
use super::TodoRequest;
use super::TodoResponseData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    body: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<ApiSuccess<TodoResponseData>, ApiError> {
    let Json(body) = body?;
    let draft = body.try_into_draft()?;

    state
        .todo_service
        .create_todo(&owner_of(&identity), draft)
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::CREATED, todo.into()))
}
