use serde::Deserialize;
use serde_json::Value;

use stockroom_core::DomainError;
use stockroom_inventory::{ApparelItem, OrderLine};

use crate::app::errors;
use crate::app::services::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/create` and `PUT /api/update`.
///
/// Fields are optional at the serde layer so that a missing field maps to a
/// field-level 400 rather than a generic body rejection.
#[derive(Debug, Deserialize)]
pub struct ApparelItemRequest {
    pub code: Option<String>,
    pub size: Option<String>,
    pub quantity: Option<u64>,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    pub code: Option<String>,
    pub size: Option<String>,
    pub quantity: Option<u64>,
}

// -------------------------
// Body validation
// -------------------------

/// Validate a single-item body (`/create`, `/update`).
pub fn parse_item(body: Value) -> Result<ApparelItem, axum::response::Response> {
    let req: ApparelItemRequest = from_value(body)?;
    let code = require_non_empty("code", req.code)?;
    let size = require_non_empty("size", req.size)?;
    let quantity = require("quantity", req.quantity)?;
    let price = require("price", req.price)?;
    Ok(ApparelItem {
        code,
        size,
        quantity,
        price,
    })
}

/// Validate an array-of-items body (`/update-multiple`).
pub fn parse_item_array(body: Value) -> Result<Vec<ApparelItem>, axum::response::Response> {
    let Value::Array(entries) = body else {
        return Err(validation_error("request body must be an array of items"));
    };
    entries.into_iter().map(parse_item).collect()
}

/// Validate an `{"order": [...]}` body (`/check-order`, `/lowest-cost`).
pub fn parse_order(body: Value) -> Result<Vec<OrderLine>, axum::response::Response> {
    let Value::Object(mut fields) = body else {
        return Err(validation_error("`order` must be an array"));
    };
    let Some(Value::Array(lines)) = fields.remove("order") else {
        return Err(validation_error("`order` must be an array"));
    };
    lines.into_iter().map(parse_order_line).collect()
}

fn parse_order_line(entry: Value) -> Result<OrderLine, axum::response::Response> {
    let req: OrderLineRequest = from_value(entry)?;
    let code = require_non_empty("code", req.code)?;
    let size = require_non_empty("size", req.size)?;
    let quantity = require("quantity", req.quantity)?;
    Ok(OrderLine {
        code,
        size,
        quantity,
    })
}

fn from_value<T: serde::de::DeserializeOwned>(
    body: Value,
) -> Result<T, axum::response::Response> {
    serde_json::from_value(body).map_err(|e| validation_error(e.to_string()))
}

fn require<T>(field: &str, value: Option<T>) -> Result<T, axum::response::Response> {
    value.ok_or_else(|| validation_error(format!("missing required field `{field}`")))
}

fn require_non_empty(
    field: &str,
    value: Option<String>,
) -> Result<String, axum::response::Response> {
    let value = require(field, value)?;
    if value.trim().is_empty() {
        return Err(validation_error(format!("`{field}` cannot be empty")));
    }
    Ok(value)
}

fn validation_error(message: impl Into<String>) -> axum::response::Response {
    errors::api_error_to_response(ApiError::Domain(DomainError::validation(message)))
}
