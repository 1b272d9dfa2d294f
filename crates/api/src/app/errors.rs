use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;

use crate::app::services::ApiError;

pub fn api_error_to_response(err: ApiError) -> axum::response::Response {
    match err {
        ApiError::Domain(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        ApiError::Domain(e @ DomainError::DuplicateKey { .. }) => {
            json_error(StatusCode::BAD_REQUEST, "duplicate_key", e.to_string())
        }
        ApiError::Domain(e @ DomainError::Unfulfillable { .. }) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "unfulfillable", e.to_string())
        }
        ApiError::Store(e) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
