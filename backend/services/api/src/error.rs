use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use referee_common::error::RefereeError;

pub struct ApiError(pub RefereeError);

impl From<RefereeError> for ApiError {
    fn from(err: RefereeError) -> Self {
        Self(err)
    }
}

/// Malformed or mistyped JSON bodies are bad input like any other.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(RefereeError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RefereeError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            RefereeError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.0.to_string()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
