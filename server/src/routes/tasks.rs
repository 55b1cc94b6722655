use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::task_handlers::{create_task, delete_task, list_tasks, update_task};
use crate::state::AppState;

pub fn task_routes(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        .with_state(state)
}
