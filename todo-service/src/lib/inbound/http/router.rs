use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_todo;
use super::handlers::create_user;
use super::handlers::delete_todo;
use super::handlers::delete_user;
use super::handlers::get_todo;
use super::handlers::get_user;
use super::handlers::health;
use super::handlers::list_todos;
use super::handlers::list_users;
use super::handlers::login;
use super::handlers::update_todo;
use super::handlers::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::ports::UserServicePort;

/// Shared handler state.
///
/// Services are held behind their ports so the router can be driven by any
/// repository implementation.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub todo_service: Arc<dyn TodoServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    todo_service: Arc<dyn TodoServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        todo_service,
        auth_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/auth/token", post(login))
        .route("/api/health", get(health));

    let protected_routes = Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route(
            "/api/users/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/todos", post(create_todo).get(list_todos))
        .route(
            "/api/todos/:todo_id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
