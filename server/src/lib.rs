pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use axum::Router;

use routes::{auth::auth_routes, tasks::task_routes, users::user_routes};
use state::AppState;

/// The full API surface, mounted under /api.
pub fn app(state: AppState) -> Router {
    let api = auth_routes(state.clone())
        .merge(user_routes(state.clone()))
        .merge(task_routes(state));
    Router::new().nest("/api", api)
}
