use axum::Router;

pub mod items;
pub mod orders;
pub mod system;

/// Router for all `/api` endpoints.
pub fn router() -> Router {
    Router::new().merge(items::router()).merge(orders::router())
}
