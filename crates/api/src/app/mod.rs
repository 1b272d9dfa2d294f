//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: the service layer (store access + inventory operations)
//! - `routes/`: HTTP routes + handlers (one file per resource area)
//! - `dto.rs`: request DTOs and body validation
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use stockroom_store::FileStore;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(store: FileStore) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(services))
}
