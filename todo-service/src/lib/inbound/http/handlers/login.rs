use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::inbound::http::router::AppState;

/// Exchange form-encoded credentials for a bearer token.
///
/// The token is returned unwrapped so standard OAuth2 password-flow clients
/// can read it directly.
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginRequest>, FormRejection>,
) -> Result<Json<auth::IssuedToken>, ApiError> {
    let Form(body) = form?;

    state
        .auth_service
        .login(&body.username, &body.password)
        .await
        .map_err(ApiError::from)
        .map(Json)
}

/// OAuth2 password-flow form body
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}
