use std::sync::Arc;

use axum::{
    Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};
use serde_json::Value;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/check-order", post(check_order))
        .route("/lowest-cost", post(lowest_cost))
}

pub async fn check_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let order = match dto::parse_order(body) {
        Ok(order) => order,
        Err(resp) => return resp,
    };

    match services.check_order(&order) {
        Ok(can_fulfill) => (
            StatusCode::OK,
            Json(serde_json::json!({ "canFulfill": can_fulfill })),
        )
            .into_response(),
        Err(e) => errors::api_error_to_response(e),
    }
}

pub async fn lowest_cost(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let order = match dto::parse_order(body) {
        Ok(order) => order,
        Err(resp) => return resp,
    };

    match services.order_cost(&order) {
        Ok(total) => (
            StatusCode::OK,
            Json(serde_json::json!({ "lowestCost": total })),
        )
            .into_response(),
        Err(e) => errors::api_error_to_response(e),
    }
}
