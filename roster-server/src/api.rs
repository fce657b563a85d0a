use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::errors::ApiError;
use crate::favicon::{generate_favicon, FAVICON_HEIGHT, FAVICON_WIDTH};
use crate::AppState;

#[derive(Deserialize)]
pub struct UserQuery {
    id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    name: String,
    email: String,
}

/// GET /users and GET /users/:id
///
/// Only the `id` query parameter is consulted; an empty `?id=` counts as
/// absent and returns the full list, as does a bare path parameter.
pub async fn get_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Response, ApiError> {
    let registry = state.registry.lock().await;

    match query.id.as_deref() {
        Some(raw) if !raw.is_empty() => {
            let id: i64 = raw.parse().map_err(|_| ApiError::InvalidIdFormat)?;
            let user = registry.get(id)?;
            Ok(Json(user).into_response())
        }
        _ => Ok(Json(registry.list()).into_response()),
    }
}

/// POST /users
///
/// A client-supplied `id` in the body is ignored; the registry assigns it.
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidInput)?;

    let mut registry = state.registry.lock().await;
    let user = registry.create(req.name, req.email);

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id: i64 = id.parse().map_err(|_| ApiError::InvalidIdFormat)?;

    let mut registry = state.registry.lock().await;
    registry.delete(id)?;

    Ok(Json(json!({ "message": "User deleted" })).into_response())
}

/// GET /
pub async fn hello() -> Response {
    Json(json!({ "Server Found": "Use API" })).into_response()
}

/// GET /favicon.ico
pub async fn favicon() -> Response {
    match generate_favicon(FAVICON_WIDTH, FAVICON_HEIGHT) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(e) => {
            tracing::error!(%e, "Failed to encode favicon");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
