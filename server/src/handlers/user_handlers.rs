use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::UserError;
use crate::state::AppState;
use crate::store::Record;

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, UserError> {
    let users = state.users.list_sanitized().await?;
    Ok(Json(users))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Record>,
) -> Result<impl IntoResponse, UserError> {
    let user = state.users.update_profile(&id, fields).await?;
    Ok(Json(json!({ "success": true, "user": user })))
}
