use crate::domain::error::AdapterError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Newtype so the domain error can become an HTTP response.
pub struct ApiError(pub AdapterError);

impl From<AdapterError> for ApiError {
    fn from(err: AdapterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            AdapterError::Format(_) => (StatusCode::UNPROCESSABLE_ENTITY, "format_error"),
            AdapterError::UnknownStatus(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unknown_status")
            }
            AdapterError::Precondition(_) => (StatusCode::CONFLICT, "precondition_failed"),
            AdapterError::NotConfigured => (StatusCode::SERVICE_UNAVAILABLE, "not_configured"),
            AdapterError::Configuration(msg) => {
                tracing::error!("configuration error: {msg}");
                (StatusCode::SERVICE_UNAVAILABLE, "configuration_error")
            }
        };

        let body = serde_json::json!({
            "error_code": error_code,
            "message": self.0.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
