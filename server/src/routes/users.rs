use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::user_handlers::{list_users, update_user};
use crate::state::AppState;

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", put(update_user))
        .with_state(state)
}
