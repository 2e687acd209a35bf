//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared handles the handlers need (product store, error policy)
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

pub use errors::ErrorExposure;
pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the tests).
pub fn build_app(services: AppServices) -> Router {
    Router::new()
        .nest("/api", routes::router())
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::cors_middleware))
                .layer(Extension(Arc::new(services))),
        )
}
