use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::error::TaskError;
use crate::state::AppState;
use crate::store::Record;

pub async fn list_tasks(State(state): State<AppState>) -> Result<impl IntoResponse, TaskError> {
    let tasks = state.tasks.list().await?;
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(fields): Json<Record>,
) -> Result<impl IntoResponse, TaskError> {
    let task = state.tasks.create(fields).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Record>,
) -> Result<impl IntoResponse, TaskError> {
    let task = state.tasks.update(&id, fields).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TaskError> {
    state.tasks.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
