use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const UNAUTHORIZED_MESSAGE: &str = "Could not validate credentials";

/// Middleware that validates the bearer token and stores the caller's
/// `auth::Identity` in request extensions.
///
/// Every rejection produces the same 401 body; the specific reason is only
/// logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let identity = state.authenticator.authorize(token).map_err(|e| {
        tracing::warn!(error = %e, "Access token rejected");
        unauthorized()
    })?;

    tracing::debug!(
        user_id = identity.user_id,
        username = %identity.subject,
        "Request authorized"
    );

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid ASCII");
        unauthorized()
    })?;

    match auth_str.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(token.trim())
        }
        _ => {
            tracing::warn!("Authorization header is not a bearer token");
            Err(unauthorized())
        }
    }
}

fn unauthorized() -> Response {
    ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()).into_response()
}
