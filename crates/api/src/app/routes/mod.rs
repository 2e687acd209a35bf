use axum::{Router, response::Response};

use crate::app::errors;

pub mod products;

/// Router for the `/api` prefix.
pub fn router() -> Router {
    Router::new().route("/products", products::method_router())
}

pub async fn not_found() -> Response {
    errors::not_found()
}
