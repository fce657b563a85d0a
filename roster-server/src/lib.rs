pub mod api;
pub mod config;
pub mod errors;
pub mod favicon;

use std::sync::Arc;

use axum::{routing::get, Router};
use roster_core::UserRegistry;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state.
///
/// The registry sits behind a single lock so that list/get/create/delete
/// serialize against each other. The length-based id assignment is only
/// correct when creates and deletes cannot interleave.
pub struct AppState {
    pub registry: Mutex<UserRegistry>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            registry: Mutex::new(UserRegistry::new()),
        })
    }
}

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // User API; /users/:id is wired to the same handler as /users and
        // the path segment is ignored in favor of the query parameter
        .route("/users", get(api::get_users).post(api::create_user))
        .route("/users/:id", get(api::get_users).delete(api::delete_user))
        // Browser hello
        .route("/", get(api::hello))
        // Favicon endpoint
        .route("/favicon.ico", get(api::favicon))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
