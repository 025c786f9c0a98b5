use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::interceptor::ObservedFailure;

/// JSON error body in the shape clients expect:
/// `{"statusCode": 404, "error": "Not Found", "message": "..."}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "statusCode": self.status.as_u16(),
            "error": self.error,
            "message": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

impl ObservedFailure for JsonApiError {
    fn status(&self) -> Option<StatusCode> {
        Some(self.status)
    }

    fn message(&self) -> Option<String> {
        self.message.clone()
    }
}
