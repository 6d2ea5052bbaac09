use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::parse_user_id;
use super::UserRequest;
use super::UserResponseData;
use crate::domain::user::models::UpdateUserCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    // Parse user ID and request at HTTP boundary
    let user_id = parse_user_id(&id)?;
    let Json(body) = body?;
    let (profile, password) = body.try_into_parts()?;

    state
        .user_service
        .update_user(&user_id, UpdateUserCommand { profile, password })
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
