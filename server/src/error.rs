use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Failures of the user endpoints. The response body keeps the
/// `{success: false, message}` shape those endpoints always used.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User already exists")]
    AlreadyExists,
    #[error("User not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            UserError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            UserError::AlreadyExists => (StatusCode::CONFLICT, self.to_string()),
            UserError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            UserError::Store(err) => {
                log::error!("user collection unavailable: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage failure".to_string())
            }
        };
        let body = Json(json!({ "success": false, "message": message }));
        (status, body).into_response()
    }
}

/// Failures of the task endpoints, bodied as a bare `{message}`.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TaskError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            TaskError::Store(err) => {
                log::error!("task collection unavailable: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage failure".to_string())
            }
        };
        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}
