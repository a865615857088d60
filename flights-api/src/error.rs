use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flights_core::CoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFoundError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(_) => AppError::NotFoundError(err.to_string()),
            CoreError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}
