use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::UserRequest;
use super::UserResponseData;
use crate::domain::user::models::CreateUserCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let Json(body) = body?;
    let (profile, password) = body.try_into_parts()?;

    state
        .user_service
        .create_user(CreateUserCommand::new(profile, password))
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}
