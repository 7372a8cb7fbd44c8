use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::GitGradeError;

impl IntoResponse for GitGradeError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            GitGradeError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            GitGradeError::Config(_) => StatusCode::BAD_REQUEST,
            GitGradeError::Fetch(_) => StatusCode::BAD_GATEWAY,
            GitGradeError::Generation(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let kind = self.classify().error_type;

        (status, Json(json!({"error": self.to_string(), "kind": kind}))).into_response()
    }
}
