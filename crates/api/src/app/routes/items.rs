use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
};
use serde_json::Value;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/create", post(create_item))
        .route("/update", put(update_item))
        .route("/update-multiple", put(update_multiple))
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let item = match dto::parse_item(body) {
        Ok(item) => item,
        Err(resp) => return resp,
    };

    match services.create_item(item) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => errors::api_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let item = match dto::parse_item(body) {
        Ok(item) => item,
        Err(resp) => return resp,
    };

    match services.upsert_item(item) {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(e) => errors::api_error_to_response(e),
    }
}

pub async fn update_multiple(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let batch = match dto::parse_item_array(body) {
        Ok(batch) => batch,
        Err(resp) => return resp,
    };

    match services.upsert_items(batch) {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::api_error_to_response(e),
    }
}
