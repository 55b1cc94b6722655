use axum::{routing::post, Router};

use crate::handlers::auth_handlers::{login, register};
use crate::state::AppState;

pub fn auth_routes(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .with_state(state)
}
