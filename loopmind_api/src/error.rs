use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use loopmind_optimizer::error::OptimizeError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl From<OptimizeError> for ApiError {
    fn from(error: OptimizeError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        }
    }
}
